//! Ball physics for a paddle-and-goal game.
//!
//! [`BallController`] owns the ball's speed and heading. An external physics
//! loop feeds it frame updates and collision events, applies the velocity it
//! computes, and integrates position. Goals are reported to an injected
//! [`Scorekeeper`].

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod math;
pub mod params;
pub mod resources;
pub mod timer;

pub use components::*;
pub use config::*;
pub use controller::BallController;
pub use error::ConfigError;
pub use events::*;
pub use params::*;
pub use resources::*;

/// Build a controller with the given seed and run its startup launch sequence.
pub fn spawn_ball<S: Scorekeeper>(
    config: BallConfig,
    scorekeeper: S,
    seed: u64,
) -> Result<BallController<S>, ConfigError> {
    let mut controller = BallController::new(config, scorekeeper, GameRng::new(seed))?;
    controller.initialize();
    Ok(controller)
}
