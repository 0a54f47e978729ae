use crate::clock::{Clock, Timestamp};
use std::cell::Cell;
use std::time::Duration;

/// A clock that only moves when told to, or when something sleeps on it.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Timestamp>,
    slept: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(now: Timestamp) -> Self {
        Self {
            now: Cell::new(now),
            slept: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }

    pub fn set(&self, now: Timestamp) {
        self.now.set(now);
    }

    /// Total time spent in `sleep` so far.
    pub fn slept(&self) -> Duration {
        self.slept.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.slept.set(self.slept.get() + duration);
        self.advance(duration);
    }
}
