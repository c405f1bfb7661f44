use std::path::Path;

use ball_core::{BallConfig, ConfigError};
use serde::{Deserialize, Serialize};

/// Arena tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct ArenaParams;

impl ArenaParams {
    // Arena, centered on the origin
    pub const WIDTH: f32 = 32.0;
    pub const HEIGHT: f32 = 24.0;
    pub const WALL_THICKNESS: f32 = 1.0;
    pub const GOAL_DEPTH: f32 = 1.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 0.8;
    pub const PADDLE_HEIGHT: f32 = 4.0;
    pub const PADDLE_INSET: f32 = 1.5;
    pub const PADDLE_SPEED: f32 = 9.0;

    // Ball
    pub const BALL_RADIUS: f32 = 0.5;

    // Score
    pub const WIN_SCORE: u32 = 5;

    // Physics
    pub const FIXED_DT: f32 = 0.0166; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}

/// Arena configuration. The `[ball]` table configures the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    pub wall_thickness: f32,
    pub goal_depth: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub win_score: u32,
    pub fixed_dt: f32,
    pub max_dt: f32,
    pub ball: BallConfig,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ArenaParams::WIDTH,
            height: ArenaParams::HEIGHT,
            wall_thickness: ArenaParams::WALL_THICKNESS,
            goal_depth: ArenaParams::GOAL_DEPTH,
            paddle_width: ArenaParams::PADDLE_WIDTH,
            paddle_height: ArenaParams::PADDLE_HEIGHT,
            paddle_inset: ArenaParams::PADDLE_INSET,
            paddle_speed: ArenaParams::PADDLE_SPEED,
            ball_radius: ArenaParams::BALL_RADIUS,
            win_score: ArenaParams::WIN_SCORE,
            fixed_dt: ArenaParams::FIXED_DT,
            max_dt: ArenaParams::MAX_DT,
            ball: BallConfig::default(),
        }
    }
}

impl ArenaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded arena configuration");
        Ok(config)
    }

    pub fn half_extents(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width, self.height) * 0.5
    }

    /// X position of a paddle's center
    pub fn paddle_x(&self, side: ball_core::Side) -> f32 {
        let x = self.width / 2.0 - self.paddle_inset;
        match side {
            ball_core::Side::Left => -x,
            ball_core::Side::Right => x,
        }
    }

    /// Clamp paddle Y to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let limit = (self.height - self.paddle_height) / 2.0;
        y.clamp(-limit, limit)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("wall_thickness", self.wall_thickness),
            ("goal_depth", self.goal_depth),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("fixed_dt", self.fixed_dt),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be > 0")));
            }
        }
        if !(self.paddle_speed.is_finite() && self.paddle_speed >= 0.0) {
            return Err(ConfigError::Invalid("paddle_speed must be >= 0".to_string()));
        }
        if self.paddle_height >= self.height {
            return Err(ConfigError::Invalid(
                "paddle_height must be smaller than the arena height".to_string(),
            ));
        }
        if !(self.paddle_inset > 0.0 && self.paddle_inset < self.width / 2.0) {
            return Err(ConfigError::Invalid(
                "paddle_inset must lie inside the half width".to_string(),
            ));
        }
        if self.max_dt.is_nan() || self.max_dt < self.fixed_dt {
            return Err(ConfigError::Invalid("max_dt must be >= fixed_dt".to_string()));
        }
        if self.win_score == 0 {
            return Err(ConfigError::Invalid("win_score must be > 0".to_string()));
        }
        self.ball.validate()?;
        let half = self.half_extents();
        let start = self.ball.start_position;
        if start.x.abs() >= half.x || start.y.abs() >= half.y {
            return Err(ConfigError::Invalid(
                "ball.start_position must be inside the arena".to_string(),
            ));
        }
        Ok(())
    }
}
