use ball_core::Side;

use crate::map::Aabb;

/// Solid or sensor shape of an arena entity
#[derive(Debug, Clone, Copy)]
pub struct Collider {
    pub aabb: Aabb,
}

impl Collider {
    pub fn new(aabb: Aabb) -> Self {
        Self { aabb }
    }
}

/// Marker: reports overlaps as triggers and never bounces the ball
#[derive(Debug, Clone, Copy, Default)]
pub struct Sensor;

/// Paddle component - which side it defends
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}
