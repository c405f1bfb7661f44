use ball_core::{spawn_ball, BallController, BallEvents, ConfigError, Score, Side};
use hecs::{Entity, World};

use crate::config::ArenaConfig;
use crate::systems::*;
use crate::{create_goal, create_paddle, create_walls};

/// Running totals of what the ball did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    pub launches: u32,
    pub resets: u32,
    pub paddle_hits: u32,
    pub bounces: u32,
    pub goals: u32,
}

impl SimStats {
    pub fn record(&mut self, events: &BallEvents) {
        self.launches += u32::from(events.launched);
        self.resets += u32::from(events.reset);
        self.paddle_hits += events.paddle_hits;
        self.bounces += events.bounces;
        self.goals += u32::from(events.scored.is_some());
    }
}

/// Headless physics loop around a single ball controller
pub struct Arena {
    pub world: World,
    pub controller: BallController<Score>,
    /// Simulated seconds, after clamping each frame
    pub elapsed: f32,
    pub config: ArenaConfig,
    pub stats: SimStats,
    overlapping: Vec<Entity>,
}

impl Arena {
    pub fn new(config: ArenaConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut world = World::new();
        create_walls(&mut world, &config);
        create_paddle(&mut world, &config, Side::Left);
        create_paddle(&mut world, &config, Side::Right);
        create_goal(&mut world, &config, Side::Left);
        create_goal(&mut world, &config, Side::Right);

        let controller = spawn_ball(config.ball.clone(), Score::new(), seed)?;
        tracing::debug!(seed, "Arena ready");

        Ok(Self {
            world,
            controller,
            elapsed: 0.0,
            config,
            stats: SimStats::default(),
            overlapping: Vec::new(),
        })
    }

    pub fn score(&self) -> &Score {
        self.controller.scorekeeper()
    }

    /// Advance one frame in fixed micro-steps
    pub fn step(&mut self, dt: f32) {
        // Clamp dt to prevent large jumps
        let clamped_dt = if dt.is_finite() {
            dt.clamp(0.0, self.config.max_dt)
        } else {
            0.0
        };

        let mut remaining_dt = clamped_dt;
        while remaining_dt > 0.0 {
            let step_dt = remaining_dt.min(self.config.fixed_dt);
            remaining_dt -= step_dt;

            // 1. Ball controller: sample velocity, ramp speed, run due sequences
            self.controller.update(step_dt);

            // 2. Move paddles toward the ball
            move_paddles(&mut self.world, self.controller.ball(), step_dt, &self.config);

            // 3. Integrate ball position
            move_ball(self.controller.ball_mut(), step_dt);

            // 4. Contacts and goal sensors
            let events = detect_collisions(
                &self.world,
                self.controller.ball_mut(),
                self.config.ball_radius,
                &mut self.overlapping,
            );
            for event in &events {
                self.controller.handle(event);
            }

            self.stats.record(self.controller.events());
        }

        self.elapsed += clamped_dt;
    }
}

/// Outcome of a headless run
#[derive(Debug, Clone, PartialEq)]
pub struct SimReport {
    pub score: Score,
    pub elapsed: f32,
    pub stats: SimStats,
    pub winner: Option<Side>,
}

/// Run until a side reaches the win score or `duration` seconds pass.
pub fn run_simulation(
    config: ArenaConfig,
    seed: u64,
    duration: f32,
    frame_dt: f32,
) -> Result<SimReport, ConfigError> {
    if !(frame_dt.is_finite() && frame_dt > 0.0) {
        return Err(ConfigError::Invalid("frame_dt must be > 0".to_string()));
    }
    let win_score = config.win_score;
    let mut arena = Arena::new(config, seed)?;

    let mut winner = None;
    while arena.elapsed < duration {
        let goals_before = arena.stats.goals;
        arena.step(frame_dt);
        if arena.stats.goals > goals_before {
            let score = arena.score();
            tracing::info!(left = score.left, right = score.right, t = arena.elapsed, "Score");
        }
        winner = arena.score().has_winner(win_score);
        if winner.is_some() {
            break;
        }
    }

    Ok(SimReport {
        score: *arena.score(),
        elapsed: arena.elapsed,
        stats: arena.stats,
        winner,
    })
}
