//! Structured time values built from time text

use crate::error::TimeError;
use crate::locale::{LocaleOptions, resolve_for_time};
use crate::normalize::{MIN_TIME_LEN, normalize};
use crate::options::TimepickerOptions;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A time of day anchored to a date, read under a locale
///
/// Only the time of day is meaningful; the anchor date never takes part in
/// comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValue {
    date: NaiveDate,
    time: NaiveTime,
    locale: LocaleOptions,
}

impl TimeValue {
    pub fn new(date: NaiveDate, time: NaiveTime, locale: LocaleOptions) -> Self {
        Self { date, time, locale }
    }

    /// Today at `hour:minute` with the default locale
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or(TimeError::OutOfRange { hour, minute })?;
        Ok(Self::new(anchor_today(None), time, LocaleOptions::default()))
    }

    /// Read time text under the negotiated locale
    ///
    /// Text shorter than four characters is rejected before any locale work.
    /// Digits of the resolved numbering system are read as ASCII digits, then
    /// the text goes through [`normalize`].
    pub fn parse(time: &str, opts: &TimepickerOptions) -> Result<Self, TimeError> {
        if time.chars().count() < MIN_TIME_LEN {
            return Err(TimeError::TooShort(time.to_string()));
        }

        let locale = resolve_for_time(time, opts);
        let ascii = locale.numbering_system.delocalize_digits(time);
        let canonical =
            normalize(ascii.as_str()).ok_or_else(|| TimeError::Unparsable(time.to_string()))?;

        debug!("Parsed '{}' as {} ({}, {})", time, canonical, locale.locale, locale.numbering_system);
        Ok(Self::new(anchor_today(opts.zone), canonical.to_naive_time(), locale))
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn second(&self) -> u32 {
        self.time.second()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn locale(&self) -> &LocaleOptions {
        &self.locale
    }

    /// Time of day with seconds and below dropped
    pub fn truncated_to_minute(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(self.time)
    }

    /// Same instant under other locale settings
    pub fn reconfigure(&self, locale: LocaleOptions) -> Self {
        Self { locale, ..self.clone() }
    }

    /// Render with a chrono pattern, digits in this value's numbering system
    pub fn to_format(&self, pattern: &str) -> String {
        let rendered = self.date.and_time(self.time).format(pattern).to_string();
        self.locale.numbering_system.localize_digits(&rendered)
    }
}

impl From<NaiveDateTime> for TimeValue {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime.date(), datetime.time(), LocaleOptions::default())
    }
}

impl<Z: TimeZone> From<DateTime<Z>> for TimeValue {
    fn from(datetime: DateTime<Z>) -> Self {
        Self::from(datetime.naive_local())
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_format("%H:%M"))
    }
}

/// Read time text, `None` when it is missing, too short or unparsable
pub fn parse_time(time: &str, opts: &TimepickerOptions) -> Option<TimeValue> {
    match TimeValue::parse(time, opts) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("{}", e);
            None
        }
    }
}

/// Current date in `zone`, or in the local zone
pub fn anchor_today(zone: Option<Tz>) -> NaiveDate {
    match zone {
        Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
        None => Local::now().date_naive(),
    }
}
