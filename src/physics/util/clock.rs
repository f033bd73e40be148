use std::{fmt::Debug, time::Duration};

/// A clock for physics objects
/// Counts ticks of the simulation, one tick per processed frame
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    elapsed: Duration,
    last_delta: Duration,
    frame: u64,
}

impl Debug for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clock")
            .field("elapsed", &self.elapsed)
            .field("frame", &self.frame)
            .finish()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get_current_time(&self) -> Duration {
        self.elapsed
    }
    pub fn get_last_delta(&self) -> Duration {
        self.last_delta
    }
    pub fn get_current_frame(&self) -> u64 {
        self.frame
    }
    /// Advance by one frame that took `delta`
    pub fn update(&mut self, delta: Duration) {
        self.elapsed += delta;
        self.last_delta = delta;
        self.frame += 1;
    }
}
