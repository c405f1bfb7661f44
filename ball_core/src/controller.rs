//! Ball controller: owns the ball's speed and heading and drives the
//! launch → play → goal → reset loop.
//!
//! The physics loop calls [`BallController::update`] once per frame, integrates
//! the position from [`BallController::ball`], and forwards contacts and
//! trigger overlaps through [`BallController::handle`].

use glam::Vec2;

use crate::components::{Ball, BallPhase};
use crate::config::BallConfig;
use crate::error::ConfigError;
use crate::events::{BallEvents, CollisionEvent, Contact, Side, Tag};
use crate::math::{clamp_vertical, hit_factor, reflect, spin};
use crate::resources::{GameRng, Scorekeeper};
use crate::timer::{Scheduled, Scheduler, Sequence};

pub struct BallController<S> {
    ball: Ball,
    // Velocity at the start of the latest update, before any engine response
    last_velocity: Vec2,
    current_speed: f32,
    phase: BallPhase,
    config: BallConfig,
    scheduler: Scheduler,
    rng: GameRng,
    scorekeeper: S,
    events: BallEvents,
}

impl<S: Scorekeeper> BallController<S> {
    /// Build a controller. Call [`initialize`](Self::initialize) before the first frame.
    pub fn new(config: BallConfig, scorekeeper: S, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            ball: Ball::new(config.start_position, Vec2::ZERO),
            last_velocity: Vec2::ZERO,
            current_speed: config.base_speed,
            phase: BallPhase::Launching,
            config,
            scheduler: Scheduler::new(),
            rng,
            scorekeeper,
            events: BallEvents::new(),
        })
    }

    /// Place the ball at the start position and schedule the first launch.
    pub fn initialize(&mut self) {
        self.scheduler.clear();
        self.events.clear();
        self.ball = Ball::new(self.config.start_position, Vec2::ZERO);
        self.last_velocity = Vec2::ZERO;
        self.current_speed = self.config.base_speed;
        self.phase = BallPhase::Launching;
        self.scheduler
            .schedule(self.config.launch_delay, Sequence::Launch);
        tracing::debug!(
            launch_delay = self.config.launch_delay,
            "Ball initialized, launch scheduled"
        );
    }

    /// Per-frame update: sample the pre-contact velocity, ramp the speed, run
    /// any reset or launch that has come due.
    pub fn update(&mut self, dt: f32) {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            tracing::warn!(dt, "Ignoring invalid time step");
            0.0
        };

        self.events.clear();
        self.last_velocity = self.ball.vel;

        if self.current_speed < self.config.max_speed {
            self.current_speed = (self.current_speed + self.config.speed_increment * dt)
                .min(self.config.max_speed);
            self.ball.vel = self.ball.vel.normalize_or_zero() * self.current_speed;
        }

        self.scheduler.advance(dt);
        while let Some(task) = self.scheduler.pop_due() {
            self.run(task);
        }
    }

    pub fn handle(&mut self, event: &CollisionEvent) {
        match event {
            CollisionEvent::Contact(contact) => self.on_collision(contact),
            CollisionEvent::Trigger { tag } => self.on_trigger(tag),
        }
    }

    /// Resolve a physical contact into a new velocity.
    pub fn on_collision(&mut self, contact: &Contact) {
        if self.phase != BallPhase::InPlay {
            tracing::trace!(tag = %contact.tag, phase = ?self.phase, "Contact ignored");
            return;
        }
        let Some(normal) = contact.normal.try_normalize() else {
            tracing::debug!(tag = %contact.tag, "Contact without a usable normal");
            return;
        };

        // Reflect the velocity sampled at frame start; the engine may already
        // have bounced or zeroed the live one.
        let direction = match self.last_velocity.try_normalize() {
            Some(incoming) => reflect(incoming, normal),
            None => normal,
        };
        let mut direction = clamp_vertical(direction, self.config.min_vertical);

        if contact.tag == Tag::Paddle {
            let factor = hit_factor(
                self.ball.pos.y,
                contact.other_position.y,
                contact.other_height,
            );
            direction = spin(direction, factor, self.config.spin_scale)
                .try_normalize()
                .unwrap_or(direction);
            self.current_speed =
                (self.current_speed + self.config.paddle_boost()).min(self.config.max_speed);
            self.events.paddle_hits += 1;
            tracing::trace!(hit_factor = factor, speed = self.current_speed, "Paddle hit");
        } else {
            self.events.bounces += 1;
            tracing::trace!(tag = %contact.tag, "Bounce");
        }

        self.ball.vel = direction * self.current_speed;
    }

    /// React to a trigger overlap. Only goal tags have an effect.
    pub fn on_trigger(&mut self, tag: &Tag) {
        let left_side = match tag {
            Tag::Goal1 => true,
            Tag::Goal2 => false,
            _ => return,
        };
        if self.phase != BallPhase::InPlay {
            tracing::debug!(goal = %tag, phase = ?self.phase, "Goal ignored, ball not in play");
            return;
        }

        tracing::info!(goal = %tag, left_side, "Goal scored");
        self.scorekeeper.add_score(left_side);
        self.events.scored = Some(if left_side { Side::Left } else { Side::Right });

        self.phase = BallPhase::Resetting;
        self.ball.vel = Vec2::ZERO;
        self.scheduler
            .schedule(self.config.reset_delay, Sequence::Reset);
    }

    fn run(&mut self, task: Scheduled) {
        match task.sequence {
            Sequence::Reset => self.reset(task.due),
            Sequence::Launch => self.launch(),
        }
    }

    fn reset(&mut self, due: f64) {
        self.ball = Ball::new(self.config.start_position, Vec2::ZERO);
        self.current_speed = self.config.base_speed;
        self.phase = BallPhase::Launching;
        self.events.reset = true;
        // Chain off the reset's due time so the launch never drifts with frame size
        self.scheduler
            .schedule_at(due + f64::from(self.config.launch_delay), Sequence::Launch);
        tracing::debug!(clock = self.scheduler.now(), "Ball reset");
    }

    fn launch(&mut self) {
        let direction = self.rng.launch_direction(self.config.launch_mode);
        self.ball.vel = direction * self.current_speed;
        self.phase = BallPhase::InPlay;
        self.events.launched = true;
        tracing::debug!(
            dir_x = direction.x,
            dir_y = direction.y,
            speed = self.current_speed,
            "Ball launched"
        );
    }
}

impl<S> BallController<S> {
    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Mutable access for the physics loop, which owns position integration.
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn velocity(&self) -> Vec2 {
        self.ball.vel
    }

    pub fn last_velocity(&self) -> Vec2 {
        self.last_velocity
    }

    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    pub fn phase(&self) -> BallPhase {
        self.phase
    }

    pub fn config(&self) -> &BallConfig {
        &self.config
    }

    /// Seconds of simulated time since construction.
    pub fn clock(&self) -> f64 {
        self.scheduler.now()
    }

    pub fn events(&self) -> &BallEvents {
        &self.events
    }

    pub fn scorekeeper(&self) -> &S {
        &self.scorekeeper
    }

    pub fn scorekeeper_mut(&mut self) -> &mut S {
        &mut self.scorekeeper
    }

    pub fn into_scorekeeper(self) -> S {
        self.scorekeeper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Score;

    const EPS: f32 = 1e-5;

    fn launched_controller() -> BallController<Score> {
        let mut controller =
            BallController::new(BallConfig::default(), Score::new(), GameRng::new(12345)).unwrap();
        controller.initialize();
        controller.update(1.0);
        assert_eq!(controller.phase(), BallPhase::InPlay);
        controller
    }

    /// Put the ball in play heading along `dir` and sample it as the frame velocity.
    fn aim(controller: &mut BallController<Score>, dir: Vec2) {
        let speed = controller.current_speed();
        controller.ball_mut().vel = dir.normalize() * speed;
        controller.update(0.0);
    }

    fn wall(normal: Vec2) -> Contact {
        Contact::new(normal, Tag::from("Wall"), Vec2::ZERO, 1.0)
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = BallConfig {
            base_speed: -1.0,
            ..BallConfig::default()
        };
        assert!(BallController::new(config, Score::new(), GameRng::default()).is_err());
    }

    #[test]
    fn test_initialize_waits_for_launch() {
        let mut controller =
            BallController::new(BallConfig::default(), Score::new(), GameRng::default()).unwrap();
        controller.initialize();
        assert_eq!(controller.phase(), BallPhase::Launching);
        assert_eq!(controller.velocity(), Vec2::ZERO);
        assert_eq!(controller.current_speed(), 5.0);

        controller.update(0.5);
        assert_eq!(controller.velocity(), Vec2::ZERO);

        controller.update(0.5);
        assert_eq!(controller.phase(), BallPhase::InPlay);
        assert!(controller.events().launched);
        assert!((controller.velocity().length() - controller.current_speed()).abs() < 1e-4);
    }

    #[test]
    fn test_update_ramps_speed_and_keeps_heading() {
        let mut controller = launched_controller();
        aim(&mut controller, Vec2::new(3.0, 4.0));
        let before = controller.current_speed();

        controller.update(2.0);

        assert!((controller.current_speed() - (before + 0.2)).abs() < EPS);
        let vel = controller.velocity();
        assert!((vel.normalize() - Vec2::new(0.6, 0.8)).length() < EPS);
        assert!((vel.length() - controller.current_speed()).abs() < 1e-4);
    }

    #[test]
    fn test_update_caps_speed_at_max() {
        let mut controller = launched_controller();
        controller.update(1000.0);
        assert_eq!(controller.current_speed(), controller.config().max_speed);
        controller.update(1.0);
        assert_eq!(controller.current_speed(), controller.config().max_speed);
    }

    #[test]
    fn test_update_ignores_invalid_dt() {
        let mut controller = launched_controller();
        let speed = controller.current_speed();
        let clock = controller.clock();
        controller.update(f32::NAN);
        controller.update(-1.0);
        assert_eq!(controller.current_speed(), speed);
        assert_eq!(controller.clock(), clock);
    }

    #[test]
    fn test_update_samples_last_velocity() {
        let mut controller = launched_controller();
        let vel = controller.velocity();
        controller.update(0.0);
        assert_eq!(controller.last_velocity(), vel);
    }

    #[test]
    fn test_wall_reflection_uses_frame_start_velocity() {
        let mut controller = launched_controller();
        aim(&mut controller, Vec2::new(1.0, -1.0));
        // Engine has already zeroed the live velocity
        controller.ball_mut().vel = Vec2::ZERO;

        controller.on_collision(&wall(Vec2::Y));

        let dir = controller.velocity().normalize();
        assert!((dir - Vec2::new(1.0, 1.0).normalize()).length() < EPS);
        assert!((controller.velocity().length() - controller.current_speed()).abs() < 1e-4);
        assert_eq!(controller.events().bounces, 1);
    }

    #[test]
    fn test_shallow_reflection_is_clamped() {
        let mut controller = launched_controller();
        aim(&mut controller, Vec2::new(-1.0, 0.05));

        controller.on_collision(&wall(Vec2::X));

        let dir = controller.velocity().normalize();
        assert!((dir.y - 0.2).abs() < EPS, "got {dir:?}");
        assert!(dir.x > 0.0);
    }

    #[test]
    fn test_wall_bounce_does_not_boost_speed() {
        let mut controller = launched_controller();
        aim(&mut controller, Vec2::new(1.0, -1.0));
        let speed = controller.current_speed();
        controller.on_collision(&wall(Vec2::Y));
        assert_eq!(controller.current_speed(), speed);
    }

    #[test]
    fn test_center_paddle_hit_has_no_spin() {
        let mut controller = launched_controller();
        controller.ball_mut().pos = Vec2::new(-14.0, 2.0);
        aim(&mut controller, Vec2::new(-0.6, 0.8));
        let speed = controller.current_speed();

        controller.on_collision(&Contact::new(
            Vec2::X,
            Tag::Paddle,
            Vec2::new(-14.5, 2.0),
            4.0,
        ));

        let dir = controller.velocity().normalize();
        assert!((dir - Vec2::new(0.6, 0.8)).length() < EPS, "got {dir:?}");
        assert!((controller.current_speed() - (speed + 0.2)).abs() < EPS);
        assert_eq!(controller.events().paddle_hits, 1);
    }

    #[test]
    fn test_top_edge_paddle_hit_adds_spin() {
        let mut controller = launched_controller();
        controller.ball_mut().pos = Vec2::new(-14.0, 4.0);
        aim(&mut controller, Vec2::new(-0.6, 0.8));

        controller.on_collision(&Contact::new(
            Vec2::X,
            Tag::Paddle,
            Vec2::new(-14.5, 2.0),
            4.0,
        ));

        let expected = Vec2::new(0.6, 0.8 + 0.25).normalize();
        let dir = controller.velocity().normalize();
        assert!((dir - expected).length() < EPS, "got {dir:?}");
    }

    #[test]
    fn test_zero_height_paddle_skips_spin() {
        let mut controller = launched_controller();
        controller.ball_mut().pos = Vec2::new(-14.0, 9.0);
        aim(&mut controller, Vec2::new(-0.6, 0.8));

        controller.on_collision(&Contact::new(Vec2::X, Tag::Paddle, Vec2::ZERO, 0.0));

        let dir = controller.velocity().normalize();
        assert!((dir - Vec2::new(0.6, 0.8)).length() < EPS);
        assert!(dir.is_finite());
    }

    #[test]
    fn test_paddle_boost_caps_at_max() {
        let config = BallConfig {
            base_speed: 14.9,
            ..BallConfig::default()
        };
        let mut controller = BallController::new(config, Score::new(), GameRng::default()).unwrap();
        controller.initialize();
        controller.update(1.0);
        aim(&mut controller, Vec2::new(-1.0, 0.5));

        controller.on_collision(&Contact::new(Vec2::X, Tag::Paddle, Vec2::ZERO, 4.0));

        assert_eq!(controller.current_speed(), 15.0);
        assert!(controller.velocity().length() <= 15.0 + 1e-4);
    }

    #[test]
    fn test_stationary_contact_leaves_along_normal() {
        let mut controller = launched_controller();
        aim(&mut controller, Vec2::X);
        controller.ball_mut().vel = Vec2::ZERO;
        controller.update(0.0);

        controller.on_collision(&wall(Vec2::NEG_X));

        let vel = controller.velocity();
        assert!(vel.is_finite());
        assert!(vel.x < 0.0);
        assert!((vel.normalize().y - 0.2).abs() < EPS);
    }

    #[test]
    fn test_zero_normal_is_ignored() {
        let mut controller = launched_controller();
        let vel = controller.velocity();
        controller.on_collision(&wall(Vec2::ZERO));
        assert_eq!(controller.velocity(), vel);
    }

    #[test]
    fn test_goal1_scores_left() {
        let mut controller = launched_controller();
        controller.on_trigger(&Tag::Goal1);
        assert_eq!(*controller.scorekeeper(), Score { left: 1, right: 0 });
        assert_eq!(controller.phase(), BallPhase::Resetting);
        assert_eq!(controller.velocity(), Vec2::ZERO);
        assert_eq!(controller.events().scored, Some(Side::Left));
    }

    #[test]
    fn test_goal2_scores_right() {
        let mut controller = launched_controller();
        controller.handle(&CollisionEvent::Trigger { tag: Tag::Goal2 });
        assert_eq!(*controller.scorekeeper(), Score { left: 0, right: 1 });
    }

    #[test]
    fn test_other_trigger_is_noop() {
        let mut controller = launched_controller();
        let vel = controller.velocity();
        controller.on_trigger(&Tag::from("Pickup"));
        controller.on_trigger(&Tag::Paddle);
        assert_eq!(controller.scorekeeper().total(), 0);
        assert_eq!(controller.phase(), BallPhase::InPlay);
        assert_eq!(controller.velocity(), vel);
    }

    #[test]
    fn test_events_ignored_while_resetting() {
        let mut controller = launched_controller();
        controller.on_trigger(&Tag::Goal1);
        controller.on_trigger(&Tag::Goal2);
        controller.on_collision(&wall(Vec2::Y));
        assert_eq!(controller.scorekeeper().total(), 1);
        assert_eq!(controller.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_reset_restores_start_and_base_speed() {
        let mut controller = launched_controller();
        controller.update(20.0);
        controller.ball_mut().pos = Vec2::new(16.5, -3.0);
        controller.on_trigger(&Tag::Goal2);

        controller.update(3.0);

        assert!(controller.events().reset);
        assert_eq!(controller.ball().pos, Vec2::ZERO);
        assert_eq!(controller.current_speed(), 5.0);
        assert_eq!(controller.phase(), BallPhase::Launching);
        assert_eq!(controller.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_large_frame_runs_reset_and_launch_together() {
        let mut controller = launched_controller();
        controller.on_trigger(&Tag::Goal1);
        controller.update(10.0);
        let events = controller.events();
        assert!(events.reset && events.launched);
        assert_eq!(controller.phase(), BallPhase::InPlay);
        assert!((controller.current_speed() - 5.0).abs() < EPS);
    }
}
