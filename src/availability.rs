//! Availability checks against min/max bounds and a minutes grid

use crate::compare::{Granularity, is_between, is_same_or_after, is_same_or_before};
use crate::error::TimeError;
use crate::format::TimeFormat;
use crate::options::TimepickerOptions;
use crate::time_value::{TimeValue, parse_time};
use log::{debug, warn};

/// Bounds and step a selectable time must satisfy
///
/// Supplied per check and never modified by it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilityConstraint {
    pub min: Option<TimeValue>,
    pub max: Option<TimeValue>,
    pub granularity: Option<Granularity>,
    pub minutes_gap: Option<u32>,
}

impl AvailabilityConstraint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min(mut self, min: TimeValue) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: TimeValue) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = Some(granularity);
        self
    }

    pub fn with_minutes_gap(mut self, minutes_gap: u32) -> Self {
        self.minutes_gap = Some(minutes_gap);
        self
    }

    /// Fails when the minute of `time` is off the minutes grid
    pub fn check_minutes_gap(&self, time: &TimeValue) -> Result<(), TimeError> {
        match self.minutes_gap {
            Some(gap) if gap != 0 && time.minute() % gap != 0 => {
                warn!("Minute {} of {} is off a {} minute grid", time.minute(), time, gap);
                Err(TimeError::MinutesGapMismatch { minutes: time.minute(), minutes_gap: gap })
            }
            _ => Ok(()),
        }
    }

    /// Whether `time` satisfies whichever bounds are set
    pub fn admits(&self, time: &TimeValue) -> bool {
        let unit = self.granularity.unwrap_or_default();
        match (&self.min, &self.max) {
            (Some(min), None) => is_same_or_after(time, min, unit),
            (None, Some(max)) => is_same_or_before(time, max, unit),
            (Some(min), Some(max)) => is_between(time, min, max, unit),
            (None, None) => true,
        }
    }

    /// Grid check followed by the bounds check
    pub fn evaluate(&self, time: &TimeValue) -> Result<bool, TimeError> {
        self.check_minutes_gap(time)?;
        Ok(self.admits(time))
    }

    /// Three-valued check of raw time text
    ///
    /// `Ok(None)` for empty text, `Ok(Some(false))` for text that cannot be
    /// read as a time, and an error when a readable time is off the minutes
    /// grid.
    pub fn check(&self, time: &str, opts: &TimepickerOptions) -> Result<Option<bool>, TimeError> {
        if time.is_empty() {
            return Ok(None);
        }

        let Some(converted) = parse_time(time, opts) else {
            debug!("'{}' is not a time, treating as unavailable", time);
            return Ok(Some(false));
        };

        self.evaluate(&converted).map(Some)
    }
}

/// Decide whether `time` can be selected
///
/// Returns `Ok(None)` while no time has been entered, distinct from a
/// firm `Ok(Some(false))`. A minute that does not sit on `minutes_gap`
/// means the caller's own step configuration is broken and is reported as
/// [`TimeError::MinutesGapMismatch`].
///
/// # Examples
///
/// ```
/// use timepicker::availability::is_time_available;
/// use timepicker::time_value::TimeValue;
///
/// let min = TimeValue::from_hm(14, 0).unwrap();
/// let max = TimeValue::from_hm(16, 0).unwrap();
/// assert_eq!(is_time_available("14:30", Some(&min), Some(&max), None, None, None), Ok(Some(true)));
/// assert_eq!(is_time_available("", Some(&min), Some(&max), None, None, None), Ok(None));
/// assert!(is_time_available("14:07", None, None, None, Some(15), None).is_err());
/// ```
pub fn is_time_available(
    time: &str,
    min: Option<&TimeValue>,
    max: Option<&TimeValue>,
    granularity: Option<Granularity>,
    minutes_gap: Option<u32>,
    format: Option<TimeFormat>,
) -> Result<Option<bool>, TimeError> {
    let constraint = AvailabilityConstraint {
        min: min.cloned(),
        max: max.cloned(),
        granularity,
        minutes_gap,
    };
    let opts = TimepickerOptions::with_format(format.unwrap_or_default());
    constraint.check(time, &opts)
}
