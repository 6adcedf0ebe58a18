//! Datewise Core — zone-aware time queries and fixed-layout date strings.
//!
//! This crate holds pure functions over a single value type plus the clock
//! abstraction they read "now" from. It installs no logging subscriber.

pub mod clock;
pub mod convert;
pub mod error;
pub mod layout;
pub mod time_value;
pub mod zone;

pub use clock::{Clock, ClockFn, GlobalClock, SystemClock, now, set_clock};
pub use convert::{
    check_past_date, check_past_date_with, convert_date_format, convert_date_format_str,
};
pub use error::TimeError;
pub use layout::DateLayout;
pub use time_value::TimeValue;
pub use zone::{Zone, ZonedTime};
