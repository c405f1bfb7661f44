//! Delayed sequencing for the reset and launch phases.
//!
//! The scheduler never blocks: callers advance its clock from their frame
//! update and drain whatever has come due.

use crate::params::Params;

/// Work the controller defers until a delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    Reset,
    Launch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scheduled {
    pub due: f64,
    pub sequence: Sequence,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now: f64,
    pending: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds elapsed since the scheduler was created.
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn advance(&mut self, dt: f32) {
        if dt > 0.0 {
            self.now += f64::from(dt);
        }
    }

    /// Schedule `sequence` to run `delay` seconds from now.
    pub fn schedule(&mut self, delay: f32, sequence: Sequence) -> f64 {
        let due = self.now + f64::from(delay.max(0.0));
        self.schedule_at(due, sequence);
        due
    }

    pub fn schedule_at(&mut self, due: f64, sequence: Sequence) {
        self.pending.push(Scheduled { due, sequence });
    }

    /// Remove and return the earliest entry that has come due.
    pub fn pop_due(&mut self) -> Option<Scheduled> {
        let deadline = self.now + Params::TIME_EPSILON;
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= deadline)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due))
            .map(|(i, _)| i)?;
        Some(self.pending.remove(index))
    }

    pub fn is_pending(&self, sequence: Sequence) -> bool {
        self.pending.iter().any(|s| s.sequence == sequence)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
