//! Integration tests for CLI command dispatch.

mod common;

use datewise_cli::config::Config;
use datewise_cli::error::CliError;
use datewise_core::TimeError;

#[test]
fn test_now_in_named_zone() {
    let output = common::run(&["now", "--zone", "Asia/Seoul"]).unwrap();

    assert_eq!(output, "2024-02-08T19:00:00+09:00 Asia/Seoul");
}

#[test]
fn test_now_uses_configured_default_zone() {
    let config = Config {
        default_zone: "UTC".to_owned(),
        ..Config::default()
    };

    let output = common::run_with_config(&["now"], &config).unwrap();

    assert_eq!(output, "2024-02-08T10:00:00+00:00 UTC");
}

#[test]
fn test_now_flag_overrides_configured_zone() {
    let config = Config {
        default_zone: "UTC".to_owned(),
        ..Config::default()
    };

    let output = common::run_with_config(&["now", "--zone", "Asia/Seoul"], &config).unwrap();

    assert!(output.ends_with("Asia/Seoul"));
}

#[test]
fn test_now_json_output() {
    let json = common::run_json(&["now", "--zone", "Asia/Seoul"]);

    assert_eq!(json["zone"], "Asia/Seoul");
    assert_eq!(json["time"], "2024-02-08T19:00:00+09:00");
}

#[test]
fn test_now_unknown_zone_is_contract_violation() {
    let err = common::run(&["now", "--zone", "Nowhere/Special"]).unwrap_err();

    assert!(matches!(err, CliError::Time(TimeError::UnknownZone(_))));
    assert!(err.is_contract_violation());
}

#[test]
fn test_previous_month_with_reference() {
    let output = common::run(&["previous-month", "--reference", "20230731"]).unwrap();

    assert_eq!(output, "06");
}

#[test]
fn test_previous_month_defaults_to_clock_date() {
    let output = common::run(&["previous-month"]).unwrap();

    assert_eq!(output, "01");
}

#[test]
fn test_previous_year_with_reference() {
    let json = common::run_json(&["previous-year", "--reference", "20230731"]);

    assert_eq!(json["previous_year"], "2022");
}

#[test]
fn test_previous_year_defaults_to_clock_date() {
    let output = common::run(&["previous-year"]).unwrap();

    assert_eq!(output, "2023");
}

#[test]
fn test_previous_month_malformed_reference_is_parse_error() {
    let err = common::run(&["previous-month", "--reference", "2023-07-31"]).unwrap_err();

    assert!(matches!(err, CliError::Time(TimeError::Parse { .. })));
    assert!(!err.is_contract_violation());
}

#[test]
fn test_check_past() {
    assert_eq!(common::run(&["check-past", "20240207"]).unwrap(), "true");
    assert_eq!(common::run(&["check-past", "20240208"]).unwrap(), "false");
    assert_eq!(common::run(&["check-past", "20240209"]).unwrap(), "false");
}

#[test]
fn test_check_past_json_output() {
    let json = common::run_json(&["check-past", "20240207"]);

    assert_eq!(json["date"], "20240207");
    assert_eq!(json["past"], true);
}

#[test]
fn test_convert() {
    let output = common::run(&[
        "convert",
        "2024-02-08",
        "--from",
        "YYYY-MM-DD",
        "--to",
        "YYYY-MM-DD hh:mm:ss",
    ])
    .unwrap();

    assert_eq!(output, "2024-02-08 00:00:00");
}

#[test]
fn test_convert_json_output_names_layouts() {
    let json = common::run_json(&["convert", "240208", "--from", "YYMMDD", "--to", "YYYY-MM-DD"]);

    assert_eq!(json["input"], "240208");
    assert_eq!(json["from"], "YYMMDD");
    assert_eq!(json["output"], "2024-02-08");
    assert_eq!(json["to"], "YYYY-MM-DD");
}

#[test]
fn test_convert_rejects_leap_second() {
    let err = common::run(&[
        "convert",
        "20240208120060",
        "--from",
        "YYYYMMDDhhmmss",
        "--to",
        "YYYY-MM-DD hh:mm:ss",
    ])
    .unwrap_err();

    assert!(matches!(err, CliError::Time(TimeError::Parse { .. })));
}

#[test]
fn test_now_padded_zone_is_contract_violation() {
    let err = common::run(&["now", "--zone", " Asia/Seoul"]).unwrap_err();

    assert!(matches!(err, CliError::Time(TimeError::UnknownZone(_))));
}

#[test]
fn test_convert_rejects_mismatched_source_layout() {
    let err = common::run(&["convert", "20240208", "--from", "YYYY-MM-DD", "--to", "YYYYMMDD"])
        .unwrap_err();

    assert!(matches!(err, CliError::Time(TimeError::Parse { .. })));
}

#[test]
fn test_convert_unknown_layout_is_contract_violation() {
    let err = common::run(&["convert", "20240208", "--from", "YYYYMMDD", "--to", "MM/DD/YYYY"])
        .unwrap_err();

    assert!(matches!(err, CliError::Time(TimeError::UnknownLayout(_))));
    assert!(err.is_contract_violation());
}
