//! Shared test helpers for CLI integration tests.
#![allow(dead_code)]

use clap::Parser;
use datewise_cli::cli::Cli;
use datewise_cli::commands;
use datewise_cli::config::Config;
use datewise_cli::error::CliError;
use datewise_test_support::FixedClock;

/// Fixed clock used across all integration tests: 2024-02-08T10:00:00Z.
pub fn fixed_clock() -> FixedClock {
    FixedClock(chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2024, 2, 8, 10, 0, 0).unwrap())
}

/// Parse `args` (without the binary name) and run them with default config.
pub fn run(args: &[&str]) -> Result<String, CliError> {
    run_with_config(args, &Config::default())
}

/// Parse `args` (without the binary name) and run them with `config`.
pub fn run_with_config(args: &[&str], config: &Config) -> Result<String, CliError> {
    let cli = Cli::try_parse_from(std::iter::once("datewise").chain(args.iter().copied()))
        .expect("arguments should parse");
    commands::run(&cli, config, &fixed_clock())
}

/// Like [`run`], decoding the output as JSON.
pub fn run_json(args: &[&str]) -> serde_json::Value {
    let mut with_flag = vec!["--json"];
    with_flag.extend_from_slice(args);
    let output = run(&with_flag).expect("command should succeed");
    serde_json::from_str(&output).expect("output should be JSON")
}
