//! Shared test clocks and utilities for Datewise.

mod clock;
mod clock_override;

pub use clock::{FixedClock, SequenceClock};
pub use clock_override::ClockOverride;
