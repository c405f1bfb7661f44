use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::Params;

/// How the launch direction is sampled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchMode {
    /// Independent `x, y` in `[-1, 1]`, normalized. Diagonals are overrepresented.
    #[default]
    BoxSample,
    /// Angle uniform over the full circle.
    UniformAngle,
}

/// Ball controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub base_speed: f32,
    pub max_speed: f32,
    pub speed_increment: f32,
    pub paddle_speed_bonus: f32,
    pub min_vertical: f32,
    pub spin_scale: f32,
    pub reset_delay: f32,
    pub launch_delay: f32,
    pub start_position: Vec2,
    pub launch_mode: LaunchMode,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            base_speed: Params::BASE_SPEED,
            max_speed: Params::MAX_SPEED,
            speed_increment: Params::SPEED_INCREMENT,
            paddle_speed_bonus: Params::PADDLE_SPEED_BONUS,
            min_vertical: Params::MIN_VERTICAL,
            spin_scale: Params::SPIN_SCALE,
            reset_delay: Params::RESET_DELAY,
            launch_delay: Params::LAUNCH_DELAY,
            start_position: Vec2::ZERO,
            launch_mode: LaunchMode::default(),
        }
    }
}

impl BallConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded ball configuration");
        Ok(config)
    }

    /// Extra speed granted by a paddle hit.
    pub fn paddle_boost(&self) -> f32 {
        self.speed_increment * self.paddle_speed_bonus
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            self.base_speed,
            self.max_speed,
            self.speed_increment,
            self.paddle_speed_bonus,
            self.min_vertical,
            self.spin_scale,
            self.reset_delay,
            self.launch_delay,
            self.start_position.x,
            self.start_position.y,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(ConfigError::Invalid("values must be finite".to_string()));
        }
        if self.base_speed <= 0.0 {
            return Err(ConfigError::Invalid("base_speed must be > 0".to_string()));
        }
        if self.max_speed < self.base_speed {
            return Err(ConfigError::Invalid(format!(
                "max_speed ({}) must be >= base_speed ({})",
                self.max_speed, self.base_speed
            )));
        }
        if self.speed_increment < 0.0 || self.paddle_speed_bonus < 0.0 {
            return Err(ConfigError::Invalid(
                "speed_increment and paddle_speed_bonus must be >= 0".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.min_vertical) {
            return Err(ConfigError::Invalid(
                "min_vertical must be in [0, 1)".to_string(),
            ));
        }
        if self.reset_delay < 0.0 || self.launch_delay < 0.0 {
            return Err(ConfigError::Invalid("delays must be >= 0".to_string()));
        }
        Ok(())
    }
}
