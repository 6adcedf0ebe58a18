//! Integration tests for the process-wide clock source and the operations
//! that read it.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, TimeZone, Utc};
use datewise_core::zone::{ASIA_SEOUL, LOCAL};
use datewise_core::{TimeValue, check_past_date, clock, now};
use datewise_test_support::{ClockOverride, FixedClock, SequenceClock};

fn instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()
}

#[test]
fn test_now_returns_override_on_every_call() {
    let fixed = instant(2024, 2, 8);
    let _guard = ClockOverride::fixed(fixed);

    assert_eq!(now(), fixed);
    assert_eq!(now(), fixed);
    assert!(clock::is_overridden());
}

#[test]
fn test_now_calls_override_function_each_time() {
    let calls = Arc::new(AtomicI64::new(0));
    let counter = Arc::clone(&calls);
    let _guard = ClockOverride::install(Arc::new(move || {
        let n = counter.fetch_add(1, Ordering::SeqCst);
        instant(2024, 2, 8) + Duration::seconds(n)
    }));

    assert_eq!(now(), instant(2024, 2, 8));
    assert_eq!(now(), instant(2024, 2, 8) + Duration::seconds(1));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_set_clock_replaces_previous_override() {
    let _guard = ClockOverride::fixed(instant(2024, 2, 8));

    clock::set_clock(Some(Arc::new(|| instant(2030, 1, 1))));

    assert_eq!(now(), instant(2030, 1, 1));
}

#[test]
fn test_dropping_override_restores_wall_clock() {
    {
        let _guard = ClockOverride::fixed(instant(2001, 1, 1));
        assert_eq!(now(), instant(2001, 1, 1));
    }

    let _guard = ClockOverride::wall_clock();
    let before = Utc::now();
    let sampled = now();
    let after = Utc::now();

    assert!(!clock::is_overridden());
    assert!(before <= sampled && sampled <= after);
}

#[test]
fn test_override_accepts_any_clock_implementation() {
    let _guard = ClockOverride::from_clock(SequenceClock::new(vec![
        instant(2024, 2, 8),
        instant(2024, 2, 9),
    ]));

    assert_eq!(now(), instant(2024, 2, 8));
    assert_eq!(now(), instant(2024, 2, 9));
}

#[test]
fn test_check_past_date_uses_clock_source() {
    let _guard = ClockOverride::from_clock(FixedClock(instant(2024, 2, 8)));

    assert!(!check_past_date("20240208").unwrap());
    assert!(!check_past_date("20240209").unwrap());
    assert!(check_past_date("20240207").unwrap());
}

#[test]
fn test_current_time_uses_clock_source() {
    let fixed = instant(2024, 2, 8);
    let _guard = ClockOverride::fixed(fixed);

    let seoul = TimeValue::new().with_zone(ASIA_SEOUL).current_time().unwrap();
    let local = TimeValue::new().with_zone(LOCAL).current_time().unwrap();
    let empty = TimeValue::new().current_time().unwrap();

    assert_eq!(seoul.zone_name(), ASIA_SEOUL);
    assert_eq!(seoul.to_utc(), fixed);
    assert_eq!(local, empty);
    assert_eq!(local.to_utc(), fixed);
}
