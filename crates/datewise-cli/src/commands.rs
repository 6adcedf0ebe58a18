//! Command dispatch.

use chrono::{DateTime, TimeZone, Utc};
use datewise_core::clock::Clock;
use datewise_core::{DateLayout, TimeValue, check_past_date_with, convert_date_format};
use serde::Serialize;
use tracing::{info, instrument};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::CliError;

/// Output of `now`.
#[derive(Debug, Serialize)]
pub struct NowOutput {
    /// RFC 3339 timestamp with the zone's offset.
    pub time: String,
    /// Zone identifier.
    pub zone: &'static str,
}

/// Output of `previous-month`.
#[derive(Debug, Serialize)]
pub struct PreviousMonthOutput {
    /// Two-digit month.
    pub previous_month: String,
}

/// Output of `previous-year`.
#[derive(Debug, Serialize)]
pub struct PreviousYearOutput {
    /// Four-digit year.
    pub previous_year: String,
}

/// Output of `check-past`.
#[derive(Debug, Serialize)]
pub struct CheckPastOutput {
    /// The checked date.
    pub date: String,
    /// Whether the date is strictly before today.
    pub past: bool,
}

/// Output of `convert`.
#[derive(Debug, Serialize)]
pub struct ConvertOutput {
    /// The input date string.
    pub input: String,
    /// Layout the input followed.
    pub from: DateLayout,
    /// The re-rendered date string.
    pub output: String,
    /// Layout of the output.
    pub to: DateLayout,
}

/// Executes `cli` against `clock` and returns the text to print.
///
/// # Errors
///
/// Returns `CliError` if the underlying operation fails or JSON rendering fails.
#[instrument(skip(cli, config, clock), fields(json = cli.json))]
pub fn run(cli: &Cli, config: &Config, clock: &dyn Clock) -> Result<String, CliError> {
    match &cli.command {
        Command::Now { zone } => {
            let zone = zone.as_deref().unwrap_or(&config.default_zone);
            info!(zone, "handling now command");
            let current = TimeValue::new().with_zone(zone).current_time_with(clock)?;
            let output = NowOutput {
                time: current.instant().to_rfc3339(),
                zone: current.zone_name(),
            };
            render(cli.json, current.to_string(), &output)
        }
        Command::PreviousMonth { reference } => {
            info!(reference = ?reference, "handling previous_month command");
            let value = TimeValue::new().with_reference(reference_instant(reference.as_deref(), clock)?);
            let previous_month = value.previous_month()?;
            render(cli.json, previous_month.clone(), &PreviousMonthOutput { previous_month })
        }
        Command::PreviousYear { reference } => {
            info!(reference = ?reference, "handling previous_year command");
            let value = TimeValue::new().with_reference(reference_instant(reference.as_deref(), clock)?);
            let previous_year = value.previous_year()?;
            render(cli.json, previous_year.clone(), &PreviousYearOutput { previous_year })
        }
        Command::CheckPast { date } => {
            info!(%date, "handling check_past command");
            let past = check_past_date_with(clock, date)?;
            let output = CheckPastOutput {
                date: date.clone(),
                past,
            };
            render(cli.json, past.to_string(), &output)
        }
        Command::Convert { date, from, to } => {
            info!(%date, %from, %to, "handling convert command");
            let from: DateLayout = from.parse()?;
            let to: DateLayout = to.parse()?;
            let converted = convert_date_format(date, from, to)?;
            let output = ConvertOutput {
                input: date.clone(),
                from,
                output: converted.clone(),
                to,
            };
            render(cli.json, converted, &output)
        }
    }
}

/// Parses an optional `YYYYMMDD` reference, falling back to `clock`'s now.
fn reference_instant(reference: Option<&str>, clock: &dyn Clock) -> Result<DateTime<Utc>, CliError> {
    match reference {
        Some(date) => Ok(Utc.from_utc_datetime(&DateLayout::Ymd8.parse(date)?)),
        None => Ok(clock.now()),
    }
}

fn render(json: bool, text: String, value: &impl Serialize) -> Result<String, CliError> {
    if json {
        Ok(serde_json::to_string(value)?)
    } else {
        Ok(text)
    }
}
