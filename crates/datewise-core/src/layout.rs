//! Fixed date layouts.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Placeholder for a single ASCII digit in a layout shape.
const DIGIT: u8 = b'd';

/// A fixed textual pattern for rendering a date or date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateLayout {
    /// Two-digit year, month, day: `240208`.
    #[serde(rename = "YYMMDD")]
    Ymd6,
    /// Four-digit year, month, day: `20240208`.
    #[serde(rename = "YYYYMMDD")]
    Ymd8,
    /// Hyphenated date: `2024-02-08`.
    #[serde(rename = "YYYY-MM-DD")]
    Ymd10,
    /// Date with hour and minute: `202402081530`.
    #[serde(rename = "YYYYMMDDhhmm")]
    YmdHm12,
    /// Date with full time: `20240208153000`.
    #[serde(rename = "YYYYMMDDhhmmss")]
    YmdHms14,
    /// Hyphenated date with full time: `2024-02-08 15:30:00`.
    #[serde(rename = "YYYY-MM-DD hh:mm:ss")]
    YmdHms19,
}

impl DateLayout {
    /// Every supported layout.
    pub const ALL: [Self; 6] = [
        Self::Ymd6,
        Self::Ymd8,
        Self::Ymd10,
        Self::YmdHm12,
        Self::YmdHms14,
        Self::YmdHms19,
    ];

    /// The layout name, e.g. `"YYYY-MM-DD"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ymd6 => "YYMMDD",
            Self::Ymd8 => "YYYYMMDD",
            Self::Ymd10 => "YYYY-MM-DD",
            Self::YmdHm12 => "YYYYMMDDhhmm",
            Self::YmdHms14 => "YYYYMMDDhhmmss",
            Self::YmdHms19 => "YYYY-MM-DD hh:mm:ss",
        }
    }

    /// The `chrono` format string for this layout.
    #[must_use]
    pub fn format_str(self) -> &'static str {
        match self {
            Self::Ymd6 => "%y%m%d",
            Self::Ymd8 => "%Y%m%d",
            Self::Ymd10 => "%Y-%m-%d",
            Self::YmdHm12 => "%Y%m%d%H%M",
            Self::YmdHms14 => "%Y%m%d%H%M%S",
            Self::YmdHms19 => "%Y-%m-%d %H:%M:%S",
        }
    }

    /// Character shape every conforming input must match; `d` stands for a digit.
    fn shape(self) -> &'static str {
        match self {
            Self::Ymd6 => "dddddd",
            Self::Ymd8 => "dddddddd",
            Self::Ymd10 => "dddd-dd-dd",
            Self::YmdHm12 => "dddddddddddd",
            Self::YmdHms14 => "dddddddddddddd",
            Self::YmdHms19 => "dddd-dd-dd dd:dd:dd",
        }
    }

    /// Whether the layout carries a time-of-day component.
    #[must_use]
    pub fn has_time(self) -> bool {
        matches!(self, Self::YmdHm12 | Self::YmdHms14 | Self::YmdHms19)
    }

    /// Whether `input` has exactly this layout's length, digit positions and separators.
    #[must_use]
    pub fn conforms(self, input: &str) -> bool {
        let shape = self.shape().as_bytes();
        let input = input.as_bytes();
        input.len() == shape.len()
            && shape.iter().zip(input).all(|(&expected, &actual)| {
                if expected == DIGIT {
                    actual.is_ascii_digit()
                } else {
                    actual == expected
                }
            })
    }

    /// Parses `input` under this layout. Missing time fields default to midnight.
    ///
    /// # Errors
    ///
    /// Returns `TimeError::Parse` if `input` does not match the layout's shape
    /// or names an impossible date or time.
    pub fn parse(self, input: &str) -> Result<NaiveDateTime, TimeError> {
        if !self.conforms(input) {
            return Err(self.parse_error(input, "input does not match layout shape"));
        }
        let parsed = match self {
            Self::Ymd6 => NaiveDate::parse_from_str(&with_century(input), Self::Ymd8.format_str())
                .map(|date| date.and_time(NaiveTime::MIN)),
            _ if self.has_time() => NaiveDateTime::parse_from_str(input, self.format_str()),
            _ => NaiveDate::parse_from_str(input, self.format_str())
                .map(|date| date.and_time(NaiveTime::MIN)),
        };
        let parsed = parsed.map_err(|e| self.parse_error(input, &e.to_string()))?;
        // chrono encodes second 60 as a leap second; clock times never reach it.
        if parsed.nanosecond() >= 1_000_000_000 {
            return Err(self.parse_error(input, "second out of range"));
        }
        Ok(parsed)
    }

    /// Renders `value` under this layout.
    #[must_use]
    pub fn format(self, value: &NaiveDateTime) -> String {
        value.format(self.format_str()).to_string()
    }

    fn parse_error(self, input: &str, reason: &str) -> TimeError {
        tracing::debug!(input, layout = self.name(), reason, "date string rejected");
        TimeError::Parse {
            input: input.to_owned(),
            layout: self,
            reason: reason.to_owned(),
        }
    }
}

/// Expands a two-digit year: 69..=99 become 19xx, 00..=68 become 20xx.
fn with_century(input: &str) -> String {
    let century = if &input[..2] >= "69" { "19" } else { "20" };
    format!("{century}{input}")
}

impl fmt::Display for DateLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DateLayout {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.name() == s)
            .ok_or_else(|| {
                tracing::warn!(layout = s, "unknown date layout name");
                TimeError::UnknownLayout(s.to_owned())
            })
    }
}
