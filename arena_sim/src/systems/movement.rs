use ball_core::{Ball, Side};
use glam::Vec2;
use hecs::World;

use crate::components::{Collider, Paddle};
use crate::config::ArenaConfig;
use crate::map::Aabb;

/// Steer paddles toward the ball when it is heading their way, otherwise back to center
pub fn move_paddles(world: &mut World, ball: &Ball, dt: f32, config: &ArenaConfig) {
    let max_step = config.paddle_speed * dt;
    let size = Vec2::new(config.paddle_width, config.paddle_height);
    for (_entity, (paddle, collider)) in world.query_mut::<(&Paddle, &mut Collider)>() {
        let incoming = match paddle.side {
            Side::Left => ball.vel.x < 0.0,
            Side::Right => ball.vel.x > 0.0,
        };
        let target = if incoming { ball.pos.y } else { 0.0 };

        let center = collider.aabb.center();
        let dy = (target - center.y).clamp(-max_step, max_step);
        let y = config.clamp_paddle_y(center.y + dy);
        collider.aabb = Aabb::from_center_size(Vec2::new(center.x, y), size);
    }
}

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball, dt: f32) {
    ball.pos += ball.vel * dt;
}
