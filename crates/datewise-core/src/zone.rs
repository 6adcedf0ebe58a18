//! Time-zone resolution.

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::layout::DateLayout;

/// Identifier of the system local zone.
pub const LOCAL: &str = "Local";
/// Identifier of the Korea Standard Time zone.
pub const ASIA_SEOUL: &str = "Asia/Seoul";
/// Identifier of Coordinated Universal Time.
pub const UTC: &str = "UTC";

/// A resolved time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// The zone configured for the running system.
    Local,
    /// A named IANA zone.
    Named(Tz),
}

impl Zone {
    /// Resolves a zone identifier. An empty name means the local zone.
    ///
    /// # Errors
    ///
    /// Returns `TimeError::UnknownZone` if `name` is neither `"Local"` nor a
    /// known IANA identifier.
    pub fn resolve(name: &str) -> Result<Self, TimeError> {
        if name.is_empty() || name == LOCAL {
            return Ok(Self::Local);
        }
        let zone = name.parse::<Tz>().map(Self::Named).map_err(|_| {
            tracing::warn!(zone = %name, "unknown time zone identifier");
            TimeError::UnknownZone(name.to_owned())
        })?;
        tracing::debug!(zone = %name, "resolved time zone");
        Ok(zone)
    }

    /// Returns the zone identifier: `"Local"` or the IANA name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Local => LOCAL,
            Self::Named(tz) => tz.name(),
        }
    }

    /// Renders `instant` in this zone.
    #[must_use]
    pub fn at(self, instant: DateTime<Utc>) -> ZonedTime {
        let local = match self {
            Self::Local => instant.with_timezone(&Local).fixed_offset(),
            Self::Named(tz) => instant.with_timezone(&tz).fixed_offset(),
        };
        ZonedTime {
            instant: local,
            zone: self,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An instant rendered in a particular zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedTime {
    instant: DateTime<FixedOffset>,
    zone: Zone,
}

impl ZonedTime {
    /// The instant with the zone's UTC offset applied.
    #[must_use]
    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    /// The same instant in UTC.
    #[must_use]
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.instant.with_timezone(&Utc)
    }

    /// The zone this instant is rendered in.
    #[must_use]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// The zone identifier, e.g. `"Asia/Seoul"`.
    #[must_use]
    pub fn zone_name(&self) -> &'static str {
        self.zone.name()
    }

    /// Formats the wall-clock reading under `layout`.
    #[must_use]
    pub fn format(&self, layout: DateLayout) -> String {
        layout.format(&self.instant.naive_local())
    }
}

impl fmt::Display for ZonedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.instant.to_rfc3339(), self.zone)
    }
}
