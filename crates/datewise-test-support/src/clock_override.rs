//! Serialized access to the process-wide clock source.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use datewise_core::clock::{self, Clock, ClockFn};

/// Held for the lifetime of every `ClockOverride` so tests that touch the
/// process-wide clock source run one at a time.
static SERIAL: Mutex<()> = Mutex::new(());

/// RAII guard over the process-wide clock source.
///
/// Creating one blocks until no other guard is alive, installs the override,
/// and dropping it reinstates the wall clock.
#[must_use = "the override is removed as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ClockOverride {
    _serial: MutexGuard<'static, ()>,
}

impl ClockOverride {
    /// Installs `clock` as the process-wide source of "now".
    pub fn install(clock: ClockFn) -> Self {
        // A test that panicked while holding the guard poisons the mutex; the
        // guard's `Drop` has still reset the clock, so the state is usable.
        let serial = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
        clock::set_clock(Some(clock));
        Self { _serial: serial }
    }

    /// Installs a clock frozen at `instant`.
    pub fn fixed(instant: DateTime<Utc>) -> Self {
        Self::install(Arc::new(move || instant))
    }

    /// Installs any `Clock` implementation as the clock source.
    pub fn from_clock<C: Clock + 'static>(source: C) -> Self {
        let source = Arc::new(source);
        Self::install(Arc::new(move || source.now()))
    }

    /// Holds the serial lock with no override, for tests asserting wall-clock behavior.
    pub fn wall_clock() -> Self {
        let serial = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
        clock::set_clock(None);
        Self { _serial: serial }
    }
}

impl Drop for ClockOverride {
    fn drop(&mut self) {
        clock::set_clock(None);
    }
}
