//! Caller-supplied options for reading time text

use crate::format::TimeFormat;
use chrono_tz::Tz;

/// Requested parsing options, negotiated into [`crate::locale::LocaleOptions`] per call
#[derive(Debug, Clone, PartialEq)]
pub struct TimepickerOptions {
    pub format: TimeFormat,
    pub locale: Option<String>,
    pub numbering_system: Option<String>,
    pub output_calendar: Option<String>,
    /// Use `en-US` instead of the environment locale when no locale is requested
    pub default_to_en: bool,
    /// Zone whose current date anchors parsed times, local zone when unset
    pub zone: Option<Tz>,
}

impl Default for TimepickerOptions {
    fn default() -> Self {
        Self {
            format: TimeFormat::default(),
            locale: None,
            numbering_system: None,
            output_calendar: None,
            default_to_en: true,
            zone: None,
        }
    }
}

impl TimepickerOptions {
    pub fn with_format(format: TimeFormat) -> Self {
        Self { format, ..Self::default() }
    }

    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self { locale: Some(locale.into()), ..Self::default() }
    }
}
