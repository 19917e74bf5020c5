//! Time-of-day core for time picker widgets
//!
//! Reads free-form time text into canonical `HH:mm`, builds locale-aware
//! [`TimeValue`]s, orders them at hour or minute granularity, decides
//! whether a time is selectable under min/max/step constraints, and
//! renders values for 12- or 24-hour display. Every operation is a pure
//! function of its inputs.

pub mod availability;
pub mod compare;
pub mod config;
pub mod error;
pub mod format;
pub mod locale;
pub mod normalize;
pub mod options;
pub mod time_value;

/// Install `env_logger` with `RUST_LOG` taking precedence over `default_filter`
///
/// Lines read `2024-03-15 14:30:00 [INFO] message`. Calling it again after a
/// logger is installed leaves the first one in place.
///
/// ```
/// timepicker::init_logger("debug");
/// timepicker::init_logger("info");
/// log::debug!("logger ready");
/// ```
pub fn init_logger(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init();
}

// Re-export commonly used types
pub use availability::{AvailabilityConstraint, is_time_available};
pub use compare::{Granularity, is_between, is_same_or_after, is_same_or_before};
pub use config::Config;
pub use error::TimeError;
pub use format::{
    INVALID_TIME, Period, TimeFormat, format_hour, format_time, from_date_time_to_string,
    is_twenty_four,
};
pub use locale::{LocaleOptions, NumberingSystem};
pub use normalize::{CanonicalTime, normalize};
pub use options::TimepickerOptions;
pub use time_value::{TimeValue, parse_time};
