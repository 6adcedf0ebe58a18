//! Date-string comparison and reformatting.

use crate::clock::{Clock, GlobalClock};
use crate::error::TimeError;
use crate::layout::DateLayout;

/// Returns whether a `YYYYMMDD` date is strictly before today, per the
/// process-wide clock source.
///
/// # Errors
///
/// Returns `TimeError::Parse` if `date` is not a valid `YYYYMMDD` date.
pub fn check_past_date(date: &str) -> Result<bool, TimeError> {
    check_past_date_with(&GlobalClock, date)
}

/// Returns whether a `YYYYMMDD` date is strictly before `clock`'s current
/// date. Today and future dates are not past.
///
/// # Errors
///
/// Returns `TimeError::Parse` if `date` is not a valid `YYYYMMDD` date.
pub fn check_past_date_with(clock: &dyn Clock, date: &str) -> Result<bool, TimeError> {
    let parsed = DateLayout::Ymd8.parse(date)?.date();
    Ok(parsed < clock.today())
}

/// Re-renders `date` from `source` layout into `target` layout.
///
/// No fallback parsing is attempted: a string that looks like a date but
/// does not match `source` exactly is rejected.
///
/// # Errors
///
/// Returns `TimeError::Parse` if `date` does not conform to `source`.
pub fn convert_date_format(
    date: &str,
    source: DateLayout,
    target: DateLayout,
) -> Result<String, TimeError> {
    let parsed = source.parse(date)?;
    let converted = target.format(&parsed);
    tracing::debug!(%source, %target, input = date, output = %converted, "converted date string");
    Ok(converted)
}

/// Like [`convert_date_format`], taking layout names such as `"YYYYMMDD"`.
///
/// # Errors
///
/// Returns `TimeError::UnknownLayout` for an unrecognized layout name and
/// `TimeError::Parse` if `date` does not conform to `source`.
pub fn convert_date_format_str(date: &str, source: &str, target: &str) -> Result<String, TimeError> {
    convert_date_format(date, source.parse()?, target.parse()?)
}
