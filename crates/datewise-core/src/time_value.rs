//! Zone-aware current time and previous month/year queries.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone};

use crate::clock::{Clock, GlobalClock};
use crate::error::TimeError;
use crate::zone::{Zone, ZonedTime};

/// An immutable value carrying an optional zone name and an optional
/// reference instant.
///
/// Build one per call site with the `with_*` methods, query it, and drop it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeValue {
    zone_name: String,
    reference: Option<DateTime<FixedOffset>>,
}

impl TimeValue {
    /// Creates a value for the local zone with no reference instant.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the zone used by [`TimeValue::current_time`]. Empty means local.
    #[must_use]
    pub fn with_zone(mut self, zone_name: impl Into<String>) -> Self {
        self.zone_name = zone_name.into();
        self
    }

    /// Sets the anchor for previous month/year queries. The calendar fields
    /// are read in the zone `reference` carries.
    #[must_use]
    pub fn with_reference<Tz: TimeZone>(mut self, reference: DateTime<Tz>) -> Self {
        self.reference = Some(reference.fixed_offset());
        self
    }

    /// The configured zone name, possibly empty.
    #[must_use]
    pub fn zone_name(&self) -> &str {
        &self.zone_name
    }

    /// The reference instant, if set.
    #[must_use]
    pub fn reference(&self) -> Option<DateTime<FixedOffset>> {
        self.reference
    }

    /// Returns "now" from the process-wide clock source, converted into the
    /// configured zone.
    ///
    /// # Errors
    ///
    /// Returns `TimeError::UnknownZone` if the zone name cannot be resolved.
    pub fn current_time(&self) -> Result<ZonedTime, TimeError> {
        self.current_time_with(&GlobalClock)
    }

    /// Returns "now" from `clock`, converted into the configured zone.
    ///
    /// # Errors
    ///
    /// Returns `TimeError::UnknownZone` if the zone name cannot be resolved.
    pub fn current_time_with(&self, clock: &dyn Clock) -> Result<ZonedTime, TimeError> {
        let zone = Zone::resolve(&self.zone_name)?;
        Ok(zone.at(clock.now()))
    }

    /// Returns the month before the reference month as `"01".."12"`.
    /// January wraps to `"12"`; the year is not part of the output.
    ///
    /// # Errors
    ///
    /// Returns `TimeError::MissingReference` if no reference instant is set.
    pub fn previous_month(&self) -> Result<String, TimeError> {
        let month = self.require_reference()?.month();
        let previous = if month == 1 { 12 } else { month - 1 };
        Ok(format!("{previous:02}"))
    }

    /// Returns the year before the reference year, four digits wide.
    ///
    /// # Errors
    ///
    /// Returns `TimeError::MissingReference` if no reference instant is set.
    pub fn previous_year(&self) -> Result<String, TimeError> {
        let year = self.require_reference()?.year();
        Ok(format!("{:04}", year - 1))
    }

    fn require_reference(&self) -> Result<DateTime<FixedOffset>, TimeError> {
        self.reference.ok_or_else(|| {
            tracing::warn!("previous month/year queried without a reference instant");
            TimeError::MissingReference
        })
    }
}
