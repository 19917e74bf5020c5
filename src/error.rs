//! Error types for time parsing and availability checks.

/// Errors produced by the time adapter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("Time text '{0}' is too short, expected at least 4 characters")]
    TooShort(String),
    #[error("Unparsable time: '{0}'")]
    Unparsable(String),
    #[error("Time out of range: {hour:02}:{minute:02}")]
    OutOfRange { hour: u32, minute: u32 },
    /// Raised when a time does not sit on the configured minutes grid
    #[error("Your minutes - {minutes} doesn't match your minutesGap - {minutes_gap}")]
    MinutesGapMismatch { minutes: u32, minutes_gap: u32 },
    #[error("Invalid time format: {0} (expected 12 or 24)")]
    InvalidFormat(String),
    #[error("Invalid period: '{0}' (expected AM or PM)")]
    InvalidPeriod(String),
    #[error("Invalid granularity: '{0}' (expected hours or minutes)")]
    InvalidGranularity(String),
}
