//! Time text normalization
//!
//! Converts the accepted time notations into the canonical zero-padded
//! 24-hour `HH:mm` form. Accepted text follows this grammar:
//!
//! ```text
//! time     = ( clock | block ) [ " " marker ]
//! clock    = digit [ digit ] ":" digit [ digit ]
//! block    = digit digit digit digit          ; HHMM
//! marker   = "am" | "pm" | "AM" | "PM"
//! ```
//!
//! Examples: `18:30`, `1:05`, `06:30 pm`, `0815`, `2218`, `12:00 AM`.

use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

// ASCII classes only, `\d` would also match other Unicode digits
static TIME_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:([0-9]{1,2}):([0-9]{1,2})|([0-9]{4}))(?: (am|pm|AM|PM))?$")
        .expect("time grammar must compile")
});

/// Shortest text that can hold a time ("0815", "1:05")
pub const MIN_TIME_LEN: usize = 4;

/// Input accepted by [`normalize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawTime<'a> {
    Missing,
    Text(&'a str),
    Clock(NaiveTime),
}

impl<'a> From<&'a str> for RawTime<'a> {
    fn from(text: &'a str) -> Self {
        RawTime::Text(text)
    }
}

impl<'a> From<&'a String> for RawTime<'a> {
    fn from(text: &'a String) -> Self {
        RawTime::Text(text.as_str())
    }
}

impl<'a> From<Option<&'a str>> for RawTime<'a> {
    fn from(text: Option<&'a str>) -> Self {
        text.map_or(RawTime::Missing, RawTime::Text)
    }
}

impl From<NaiveTime> for RawTime<'_> {
    fn from(time: NaiveTime) -> Self {
        RawTime::Clock(time)
    }
}

impl From<NaiveDateTime> for RawTime<'_> {
    fn from(datetime: NaiveDateTime) -> Self {
        RawTime::Clock(datetime.time())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for RawTime<'_> {
    fn from(datetime: DateTime<Tz>) -> Self {
        RawTime::Clock(datetime.naive_local().time())
    }
}

/// A time of day in canonical `HH:mm` form
///
/// Hour is always in 0..24 and minute in 0..60, so the rendered text is
/// exactly five characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalTime {
    hour: u32,
    minute: u32,
}

impl CanonicalTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn to_naive_time(self) -> NaiveTime {
        // In range by construction
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for CanonicalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Normalize time text or a clock value to canonical `HH:mm`
///
/// A "pm" marker adds twelve hours except on 12, which stays noon; an "am"
/// marker on 12 becomes 0. Returns `None` for missing, too short or
/// malformed text, and for text whose 24-hour result falls outside
/// 00:00..=23:59 (e.g. "24:00" or a nonsensical "13:00 pm").
///
/// # Examples
///
/// ```
/// use timepicker::normalize::normalize;
///
/// assert_eq!(normalize("06:30 pm").unwrap().to_string(), "18:30");
/// assert_eq!(normalize("12:00 am").unwrap().to_string(), "00:00");
/// assert_eq!(normalize("1815").unwrap().to_string(), "18:15");
/// assert!(normalize("1:2").is_none());
/// ```
pub fn normalize<'a>(raw: impl Into<RawTime<'a>>) -> Option<CanonicalTime> {
    match raw.into() {
        RawTime::Missing => None,
        RawTime::Clock(time) => CanonicalTime::new(time.hour(), time.minute()),
        RawTime::Text(text) => normalize_text(text),
    }
}

fn normalize_text(text: &str) -> Option<CanonicalTime> {
    if text.chars().count() < MIN_TIME_LEN {
        return None;
    }

    let caps = TIME_GRAMMAR.captures(text)?;

    let (mut hour, minute) = if let Some(block) = caps.get(3) {
        // HHMM
        let block = block.as_str();
        (block[..2].parse::<u32>().ok()?, block[2..].parse::<u32>().ok()?)
    } else {
        (caps.get(1)?.as_str().parse::<u32>().ok()?, caps.get(2)?.as_str().parse::<u32>().ok()?)
    };

    match caps.get(4).map(|m| m.as_str().to_lowercase()).as_deref() {
        Some("am") if hour == 12 => hour = 0,
        Some("pm") if hour != 12 => hour += 12,
        _ => {}
    }

    let canonical = CanonicalTime::new(hour, minute);
    if canonical.is_none() {
        debug!("Time '{}' resolves outside the day: {}:{}", text, hour, minute);
    }
    canonical
}
