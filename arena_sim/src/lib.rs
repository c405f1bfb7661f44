//! Headless arena that drives a [`ball_core::BallController`]: walls, two
//! tracking paddles and two goal sensors in a hecs world, stepped at a fixed
//! rate.

pub mod arena;
pub mod components;
pub mod config;
pub mod map;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use map::*;

use ball_core::{Side, Tag};
use glam::Vec2;
use hecs::World;

/// Helper to create the top and bottom walls
pub fn create_walls(world: &mut World, config: &ArenaConfig) -> [hecs::Entity; 2] {
    let size = Vec2::new(config.width + 2.0 * config.goal_depth, config.wall_thickness);
    let y = (config.height + config.wall_thickness) / 2.0;
    [y, -y].map(|y| {
        world.spawn((
            Collider::new(Aabb::from_center_size(Vec2::new(0.0, y), size)),
            Tag::from("Wall"),
        ))
    })
}

/// Helper to create a paddle entity, centered vertically
pub fn create_paddle(world: &mut World, config: &ArenaConfig, side: Side) -> hecs::Entity {
    let center = Vec2::new(config.paddle_x(side), 0.0);
    let size = Vec2::new(config.paddle_width, config.paddle_height);
    world.spawn((
        Paddle::new(side),
        Collider::new(Aabb::from_center_size(center, size)),
        Tag::Paddle,
    ))
}

/// Helper to create a goal sensor behind one edge.
///
/// Entering the right-hand goal (`Goal1`) scores for the left player, the
/// left-hand goal (`Goal2`) for the right player.
pub fn create_goal(world: &mut World, config: &ArenaConfig, side: Side) -> hecs::Entity {
    let x = (config.width + config.goal_depth) / 2.0;
    let (x, tag) = match side {
        Side::Left => (-x, Tag::Goal2),
        Side::Right => (x, Tag::Goal1),
    };
    let size = Vec2::new(config.goal_depth, config.height);
    world.spawn((
        Collider::new(Aabb::from_center_size(Vec2::new(x, 0.0), size)),
        Sensor,
        tag,
    ))
}
