use glam::Vec2;

use crate::config::LaunchMode;

/// Receives goal notifications from the ball controller.
pub trait Scorekeeper {
    /// `left_side` is true when the left player earned the point.
    fn add_score(&mut self, left_side: bool);
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn total(&self) -> u32 {
        self.left + self.right
    }

    pub fn has_winner(&self, win_score: u32) -> Option<crate::Side> {
        if self.left >= win_score {
            Some(crate::Side::Left)
        } else if self.right >= win_score {
            Some(crate::Side::Right)
        } else {
            None
        }
    }
}

impl Scorekeeper for Score {
    fn add_score(&mut self, left_side: bool) {
        if left_side {
            self.increment_left();
        } else {
            self.increment_right();
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Unit launch direction.
    pub fn launch_direction(&mut self, mode: LaunchMode) -> Vec2 {
        use rand::Rng;
        match mode {
            LaunchMode::BoxSample => loop {
                let x: f32 = self.0.gen_range(-1.0..=1.0);
                let y: f32 = self.0.gen_range(-1.0..=1.0);
                // Resample the (vanishingly rare) zero vector
                if let Some(dir) = Vec2::new(x, y).try_normalize() {
                    return dir;
                }
            },
            LaunchMode::UniformAngle => {
                let angle: f32 = self.0.gen_range(0.0..std::f32::consts::TAU);
                Vec2::from_angle(angle)
            }
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
