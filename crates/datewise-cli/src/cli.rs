//! Command-line arguments.

use clap::{Parser, Subcommand};

/// Zone-aware time queries and date-string conversion.
#[derive(Debug, Parser)]
#[command(name = "datewise", version)]
pub struct Cli {
    /// Print a JSON object instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current time in a zone
    Now {
        /// IANA zone name or `Local`; defaults to $DATEWISE_ZONE, then local
        #[arg(short, long)]
        zone: Option<String>,
    },
    /// Print the month before the reference date as `01`..`12`
    PreviousMonth {
        /// Reference date as YYYYMMDD; defaults to today
        #[arg(short, long)]
        reference: Option<String>,
    },
    /// Print the year before the reference date
    PreviousYear {
        /// Reference date as YYYYMMDD; defaults to today
        #[arg(short, long)]
        reference: Option<String>,
    },
    /// Print whether a YYYYMMDD date is strictly before today
    CheckPast {
        /// Date as YYYYMMDD
        date: String,
    },
    /// Re-render a date string from one layout into another
    Convert {
        /// The date string to convert
        date: String,
        /// Layout the input follows, e.g. `YYYYMMDD`
        #[arg(long)]
        from: String,
        /// Layout to render, e.g. `YYYY-MM-DD`
        #[arg(long)]
        to: String,
    },
}
