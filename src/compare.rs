//! Time-of-day ordering at hour or minute granularity
//!
//! Hour granularity is coarse bucketing: minutes are ignored entirely, so
//! 14:59 is same-or-after a 14:00 bound and 14:01 is same-or-before it.

use crate::error::TimeError;
use crate::time_value::TimeValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Hours,
    #[default]
    Minutes,
}

impl FromStr for Granularity {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hours" | "hour" => Ok(Granularity::Hours),
            "minutes" | "minute" => Ok(Granularity::Minutes),
            _ => Err(TimeError::InvalidGranularity(s.to_string())),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Hours => f.write_str("hours"),
            Granularity::Minutes => f.write_str("minutes"),
        }
    }
}

fn has_same_minute(time: &TimeValue, compare_with: &TimeValue) -> bool {
    time.truncated_to_minute() == compare_with.truncated_to_minute()
}

pub fn is_same_or_after(time: &TimeValue, compare_with: &TimeValue, unit: Granularity) -> bool {
    match unit {
        Granularity::Hours => time.hour() >= compare_with.hour(),
        Granularity::Minutes => {
            has_same_minute(time, compare_with) || time.time() > compare_with.time()
        }
    }
}

pub fn is_same_or_before(time: &TimeValue, compare_with: &TimeValue, unit: Granularity) -> bool {
    match unit {
        Granularity::Hours => time.hour() <= compare_with.hour(),
        Granularity::Minutes => {
            has_same_minute(time, compare_with) || time.time() <= compare_with.time()
        }
    }
}

/// Whether `time` lies within `before..=after`, both bounds inclusive
pub fn is_between(
    time: &TimeValue,
    before: &TimeValue,
    after: &TimeValue,
    unit: Granularity,
) -> bool {
    is_same_or_before(time, after, unit) && is_same_or_after(time, before, unit)
}
