/// Ball tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Speed
    pub const BASE_SPEED: f32 = 5.0;
    pub const MAX_SPEED: f32 = 15.0;
    pub const SPEED_INCREMENT: f32 = 0.1; // units per second, per second
    pub const PADDLE_SPEED_BONUS: f32 = 2.0; // multiples of SPEED_INCREMENT per paddle hit

    // Trajectory
    pub const MIN_VERTICAL: f32 = 0.2; // anti-stall floor for |direction.y|
    pub const SPIN_SCALE: f32 = 0.5;

    // Sequencing (seconds)
    pub const RESET_DELAY: f32 = 3.0;
    pub const LAUNCH_DELAY: f32 = 1.0;

    // Scheduler tolerance when comparing clock against due times
    pub const TIME_EPSILON: f64 = 1e-6;
}
