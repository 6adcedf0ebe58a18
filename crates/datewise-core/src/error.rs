//! Error types.

use thiserror::Error;

use crate::layout::DateLayout;

/// Errors produced by time and date operations.
///
/// Variants fall into two classes. Contract violations (`UnknownZone`,
/// `MissingReference`, `UnknownLayout`) mean the caller broke an API
/// precondition and should fix the call site. `Parse` means the input data
/// itself was malformed and is expected at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// The time-zone identifier is not the local zone or a known IANA zone.
    #[error("unknown time zone: {0}")]
    UnknownZone(String),

    /// A previous-month/previous-year query was made without a reference instant.
    #[error("reference instant is not set")]
    MissingReference,

    /// The layout name does not match any supported layout.
    #[error("unknown date layout: {0}")]
    UnknownLayout(String),

    /// The input does not conform to the declared layout.
    #[error("cannot parse {input:?} as {layout}: {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// The layout the input was declared to follow.
        layout: DateLayout,
        /// Why parsing failed.
        reason: String,
    },
}

impl TimeError {
    /// Returns `true` when the error signals misuse of the API rather than bad input data.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        match self {
            Self::UnknownZone(_) | Self::MissingReference | Self::UnknownLayout(_) => true,
            Self::Parse { .. } => false,
        }
    }
}
