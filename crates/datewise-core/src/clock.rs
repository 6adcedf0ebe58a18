//! Clock abstraction for determinism.
//!
//! Components that need "now" take a `&dyn Clock`. For call sites that cannot
//! thread a clock through, the process-wide clock source ([`now`] /
//! [`set_clock`]) can be overridden instead.
//!
//! The override is a single process-wide slot. Installing it is memory-safe,
//! but two tests installing different overrides in parallel will observe
//! each other's clock. Tests that touch it must run serialized (see
//! `datewise_test_support::ClockOverride`).

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, NaiveDate, Utc};

/// A zero-argument function producing the current instant.
pub type ClockFn = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

static CLOCK_OVERRIDE: RwLock<Option<ClockFn>> = RwLock::new(None);

/// Abstraction over system time for deterministic behavior.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current calendar date in UTC.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that reads the process-wide clock source, honoring any override.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalClock;

impl Clock for GlobalClock {
    fn now(&self) -> DateTime<Utc> {
        now()
    }
}

/// Returns the override instant if one is installed, otherwise the wall clock in UTC.
#[must_use]
pub fn now() -> DateTime<Utc> {
    // Clone out of the lock so the override may itself call `set_clock`.
    let current = CLOCK_OVERRIDE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    match current {
        Some(clock) => clock(),
        None => Utc::now(),
    }
}

/// Installs `clock` as the process-wide source of "now", replacing any
/// previous override. `None` reinstates the wall clock.
pub fn set_clock(clock: Option<ClockFn>) {
    tracing::debug!(installed = clock.is_some(), "replacing clock source");
    *CLOCK_OVERRIDE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = clock;
}

/// Returns `true` when an override is currently installed.
#[must_use]
pub fn is_overridden() -> bool {
    CLOCK_OVERRIDE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}
