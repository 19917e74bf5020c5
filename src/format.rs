//! Display formatting and hour-wheel helpers.
//!
//! Displayed values are always rendered in the presentation locale
//! (`en-US`, `latn` digits), whatever locale a [`TimeValue`] was parsed with.

use crate::error::TimeError;
use crate::locale::LocaleOptions;
use crate::normalize::{MIN_TIME_LEN, normalize};
use crate::time_value::TimeValue;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel shown in place of a time that cannot be displayed
pub const INVALID_TIME: &str = "Invalid Time";

/// Clock format used for display and for the hour wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "12")]
    Twelve,
    #[serde(rename = "24")]
    TwentyFour,
}

impl TimeFormat {
    /// chrono pattern for this format ("hh:mm a" / "HH:mm")
    pub fn pattern(self) -> &'static str {
        match self {
            TimeFormat::Twelve => "%I:%M %p",
            TimeFormat::TwentyFour => "%H:%M",
        }
    }

    pub fn hours(self) -> u32 {
        match self {
            TimeFormat::Twelve => 12,
            TimeFormat::TwentyFour => 24,
        }
    }
}

impl TryFrom<u32> for TimeFormat {
    type Error = TimeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            12 => Ok(TimeFormat::Twelve),
            24 => Ok(TimeFormat::TwentyFour),
            other => Err(TimeError::InvalidFormat(other.to_string())),
        }
    }
}

impl FromStr for TimeFormat {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "12" => Ok(TimeFormat::Twelve),
            "24" => Ok(TimeFormat::TwentyFour),
            other => Err(TimeError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hours())
    }
}

/// AM/PM designator, only meaningful with [`TimeFormat::Twelve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    Am,
    Pm,
}

impl FromStr for Period {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "am" => Ok(Period::Am),
            "pm" => Ok(Period::Pm),
            _ => Err(TimeError::InvalidPeriod(s.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Am => f.write_str("AM"),
            Period::Pm => f.write_str("PM"),
        }
    }
}

pub fn is_twenty_four(format: TimeFormat) -> bool {
    format == TimeFormat::TwentyFour
}

/// Convert an hour-wheel selection into a 24-hour hour
///
/// In 24-hour format the hour passes through and the period is ignored.
/// In 12-hour format 12 AM maps to 0 and 12 PM stays 12.
pub fn format_hour(current_hour: u32, format: TimeFormat, period: Period) -> u32 {
    if is_twenty_four(format) {
        return current_hour;
    }

    let hour = match period {
        Period::Am => current_hour,
        Period::Pm => current_hour.saturating_add(12),
    };

    match (period, hour) {
        (Period::Am, 12) => 0,
        (Period::Pm, 24) => 12,
        _ => hour,
    }
}

/// Render a time for the input field, e.g. "06:30 PM" or "18:30"
pub fn from_date_time_to_string(time: &TimeValue, format: TimeFormat) -> String {
    time.reconfigure(LocaleOptions::default()).to_format(format.pattern())
}

/// Quick display of raw time text as canonical `HH:mm`
///
/// Text that is too short or does not follow the time grammar renders as
/// [`INVALID_TIME`].
pub fn format_time(time: &str) -> String {
    if time.chars().count() < MIN_TIME_LEN {
        return INVALID_TIME.to_string();
    }

    match normalize(time) {
        Some(canonical) => canonical.to_string(),
        None => {
            debug!("Cannot display '{}' as a time", time);
            INVALID_TIME.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::NumberingSystem;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(12, TimeFormat::Twelve, Period::Am, 0 ; "midnight")]
    #[test_case(12, TimeFormat::Twelve, Period::Pm, 12 ; "noon")]
    #[test_case(6, TimeFormat::Twelve, Period::Pm, 18 ; "evening")]
    #[test_case(6, TimeFormat::Twelve, Period::Am, 6 ; "morning")]
    #[test_case(11, TimeFormat::Twelve, Period::Pm, 23 ; "last hour")]
    #[test_case(6, TimeFormat::TwentyFour, Period::Pm, 6 ; "24h ignores period")]
    #[test_case(0, TimeFormat::TwentyFour, Period::Am, 0 ; "24h midnight")]
    #[test_case(u32::MAX, TimeFormat::Twelve, Period::Pm, u32::MAX ; "huge pm hour saturates")]
    #[test_case(13, TimeFormat::Twelve, Period::Pm, 25 ; "pm hour past twelve passes through")]
    fn test_format_hour(hour: u32, format: TimeFormat, period: Period, expected: u32) {
        assert_eq!(format_hour(hour, format, period), expected);
    }

    #[test]
    fn test_is_twenty_four() {
        assert!(is_twenty_four(TimeFormat::TwentyFour));
        assert!(!is_twenty_four(TimeFormat::Twelve));
        assert_eq!(TimeFormat::default(), TimeFormat::Twelve);
    }

    #[test]
    fn test_time_format_conversions() {
        assert_eq!(TimeFormat::try_from(24).unwrap(), TimeFormat::TwentyFour);
        assert_eq!("12".parse::<TimeFormat>().unwrap(), TimeFormat::Twelve);
        assert!(TimeFormat::try_from(13).is_err());
        assert!("twelve".parse::<TimeFormat>().is_err());
        assert_eq!(TimeFormat::TwentyFour.to_string(), "24");
    }

    #[test]
    fn test_period_parsing() {
        assert_eq!("am".parse::<Period>().unwrap(), Period::Am);
        assert_eq!("PM".parse::<Period>().unwrap(), Period::Pm);
        assert!("noon".parse::<Period>().is_err());
        assert_eq!(Period::Pm.to_string(), "PM");
    }

    #[test]
    fn test_from_date_time_to_string() {
        let time = TimeValue::from_hm(18, 30).unwrap();
        assert_eq!(from_date_time_to_string(&time, TimeFormat::Twelve), "06:30 PM");
        assert_eq!(from_date_time_to_string(&time, TimeFormat::TwentyFour), "18:30");

        let midnight = TimeValue::from_hm(0, 5).unwrap();
        assert_eq!(from_date_time_to_string(&midnight, TimeFormat::Twelve), "12:05 AM");
        assert_eq!(from_date_time_to_string(&midnight, TimeFormat::TwentyFour), "00:05");
    }

    #[test]
    fn test_display_ignores_source_locale() {
        let arabic = LocaleOptions::new("ar-EG", NumberingSystem::Arab);
        let time = TimeValue::from_hm(9, 45).unwrap().reconfigure(arabic);
        assert_eq!(time.to_format(TimeFormat::TwentyFour.pattern()), "٠٩:٤٥");
        assert_eq!(from_date_time_to_string(&time, TimeFormat::TwentyFour), "09:45");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(""), INVALID_TIME);
        assert_eq!(format_time("1:2"), INVALID_TIME);
        assert_eq!(format_time("815"), INVALID_TIME);
        assert_eq!(format_time("6:30 pm"), "18:30");
        assert_eq!(format_time("0815"), "08:15");
        assert_eq!(format_time("not a time"), INVALID_TIME);
    }
}
