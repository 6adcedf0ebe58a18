//! Test clocks — deterministic `Clock` implementations for tests.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use datewise_core::clock::Clock;

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that returns instants from a predetermined sequence. Panics if the
/// sequence is exhausted. Used in tests that observe "now" more than once.
#[derive(Debug)]
pub struct SequenceClock {
    instants: Vec<DateTime<Utc>>,
    index: Mutex<usize>,
}

impl SequenceClock {
    /// Create a new `SequenceClock` over the given instants.
    #[must_use]
    pub fn new(instants: Vec<DateTime<Utc>>) -> Self {
        Self {
            instants,
            index: Mutex::new(0),
        }
    }
}

impl Clock for SequenceClock {
    fn now(&self) -> DateTime<Utc> {
        let mut index = self.index.lock().unwrap();
        let instant = self.instants[*index];
        *index += 1;
        instant
    }
}
