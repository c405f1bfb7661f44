use glam::Vec2;

/// Ball body - position and velocity shared with the physics loop
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }
}

/// Lifecycle phase of the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallPhase {
    /// Waiting for the launch delay to elapse
    #[default]
    Launching,
    /// Moving and reacting to contacts
    InPlay,
    /// Goal scored, inert until the reset delay elapses
    Resetting,
}
