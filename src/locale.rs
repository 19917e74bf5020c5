//! Locale and numbering-system resolution
//!
//! Decides which locale and numbering system are used to read a piece of
//! time text. Requested options go through a small negotiation (tag
//! canonicalization, `-u-nu-`/`-u-ca-` extensions, per-language default
//! digits) and plain ASCII-digit text is always read with the defaults.

use crate::options::TimepickerOptions;
use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_CALENDAR: &str = "gregory";

const CALENDARS: &[&str] = &[
    "buddhist",
    "chinese",
    "coptic",
    "dangi",
    "ethioaa",
    "ethiopic",
    "gregory",
    "hebrew",
    "indian",
    "islamic",
    "islamic-civil",
    "islamic-rgsa",
    "islamic-tbla",
    "islamic-umalqura",
    "iso8601",
    "japanese",
    "persian",
    "roc",
];

/// Decimal numbering systems a time can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberingSystem {
    #[default]
    Latn,
    Arab,
    Arabext,
    Beng,
    Deva,
    Fullwide,
    Gujr,
    Guru,
    Hanidec,
    Khmr,
    Knda,
    Laoo,
    Mlym,
    Mong,
    Mymr,
    Orya,
    Tamldec,
    Telu,
    Thai,
    Tibt,
}

const HANIDEC_DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

impl NumberingSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            NumberingSystem::Latn => "latn",
            NumberingSystem::Arab => "arab",
            NumberingSystem::Arabext => "arabext",
            NumberingSystem::Beng => "beng",
            NumberingSystem::Deva => "deva",
            NumberingSystem::Fullwide => "fullwide",
            NumberingSystem::Gujr => "gujr",
            NumberingSystem::Guru => "guru",
            NumberingSystem::Hanidec => "hanidec",
            NumberingSystem::Khmr => "khmr",
            NumberingSystem::Knda => "knda",
            NumberingSystem::Laoo => "laoo",
            NumberingSystem::Mlym => "mlym",
            NumberingSystem::Mong => "mong",
            NumberingSystem::Mymr => "mymr",
            NumberingSystem::Orya => "orya",
            NumberingSystem::Tamldec => "tamldec",
            NumberingSystem::Telu => "telu",
            NumberingSystem::Thai => "thai",
            NumberingSystem::Tibt => "tibt",
        }
    }

    /// Code point of the digit zero, `None` for non-contiguous digit sets
    fn zero(self) -> Option<u32> {
        let zero = match self {
            NumberingSystem::Latn => 0x30,
            NumberingSystem::Arab => 0x660,
            NumberingSystem::Arabext => 0x6F0,
            NumberingSystem::Beng => 0x9E6,
            NumberingSystem::Deva => 0x966,
            NumberingSystem::Fullwide => 0xFF10,
            NumberingSystem::Gujr => 0xAE6,
            NumberingSystem::Guru => 0xA66,
            NumberingSystem::Hanidec => return None,
            NumberingSystem::Khmr => 0x17E0,
            NumberingSystem::Knda => 0xCE6,
            NumberingSystem::Laoo => 0xED0,
            NumberingSystem::Mlym => 0xD66,
            NumberingSystem::Mong => 0x1810,
            NumberingSystem::Mymr => 0x1040,
            NumberingSystem::Orya => 0xB66,
            NumberingSystem::Tamldec => 0xBE6,
            NumberingSystem::Telu => 0xC66,
            NumberingSystem::Thai => 0xE50,
            NumberingSystem::Tibt => 0xF20,
        };
        Some(zero)
    }

    /// Glyph for the decimal digit `value` (0..=9)
    pub fn digit(self, value: u32) -> Option<char> {
        if value > 9 {
            return None;
        }
        match self.zero() {
            Some(zero) => char::from_u32(zero + value),
            None => HANIDEC_DIGITS.get(value as usize).copied(),
        }
    }

    /// Value of `c` when it is a digit of this numbering system
    pub fn digit_value(self, c: char) -> Option<u32> {
        match self.zero() {
            Some(zero) => (c as u32).checked_sub(zero).filter(|v| *v <= 9),
            None => HANIDEC_DIGITS.iter().position(|d| *d == c).map(|p| p as u32),
        }
    }

    /// Rewrite ASCII digits as digits of this numbering system
    pub fn localize_digits(self, text: &str) -> String {
        text.chars()
            .map(|c| c.to_digit(10).filter(|_| c.is_ascii_digit()).and_then(|v| self.digit(v)).unwrap_or(c))
            .collect()
    }

    /// Rewrite digits of this numbering system as ASCII digits
    pub fn delocalize_digits(self, text: &str) -> String {
        text.chars()
            .map(|c| self.digit_value(c).and_then(|v| char::from_digit(v, 10)).unwrap_or(c))
            .collect()
    }

    /// Numbering system a locale uses when none is requested
    fn default_for(tag: &LanguageTag) -> NumberingSystem {
        let region = tag.region.as_deref();
        match tag.language.as_str() {
            "ar" => match region {
                Some("DZ" | "EH" | "LY" | "MA" | "TN") => NumberingSystem::Latn,
                _ => NumberingSystem::Arab,
            },
            "fa" | "ps" => NumberingSystem::Arabext,
            "ur" if region == Some("IN") => NumberingSystem::Arabext,
            "bn" => NumberingSystem::Beng,
            "mr" | "ne" | "sa" => NumberingSystem::Deva,
            "my" => NumberingSystem::Mymr,
            "dz" => NumberingSystem::Tibt,
            _ => NumberingSystem::Latn,
        }
    }
}

impl FromStr for NumberingSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let system = match s.trim().to_lowercase().as_str() {
            "latn" => NumberingSystem::Latn,
            "arab" => NumberingSystem::Arab,
            "arabext" => NumberingSystem::Arabext,
            "beng" => NumberingSystem::Beng,
            "deva" => NumberingSystem::Deva,
            "fullwide" => NumberingSystem::Fullwide,
            "gujr" => NumberingSystem::Gujr,
            "guru" => NumberingSystem::Guru,
            "hanidec" => NumberingSystem::Hanidec,
            "khmr" => NumberingSystem::Khmr,
            "knda" => NumberingSystem::Knda,
            "laoo" => NumberingSystem::Laoo,
            "mlym" => NumberingSystem::Mlym,
            "mong" => NumberingSystem::Mong,
            "mymr" => NumberingSystem::Mymr,
            "orya" => NumberingSystem::Orya,
            "tamldec" => NumberingSystem::Tamldec,
            "telu" => NumberingSystem::Telu,
            "thai" => NumberingSystem::Thai,
            "tibt" => NumberingSystem::Tibt,
            other => return Err(format!("Unknown numbering system: {}", other)),
        };
        Ok(system)
    }
}

impl fmt::Display for NumberingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Locale settings a time is read and rendered with
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocaleOptions {
    pub locale: String,
    pub numbering_system: NumberingSystem,
    pub output_calendar: String,
}

impl LocaleOptions {
    pub fn new(locale: impl Into<String>, numbering_system: NumberingSystem) -> Self {
        Self { locale: locale.into(), numbering_system, output_calendar: DEFAULT_CALENDAR.to_string() }
    }
}

impl Default for LocaleOptions {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE, NumberingSystem::Latn)
    }
}

/// A parsed `language[-Script][-REGION][-u-key-value...]` tag
#[derive(Debug, Clone, PartialEq, Eq)]
struct LanguageTag {
    language: String,
    script: Option<String>,
    region: Option<String>,
    numbering: Option<String>,
    calendar: Option<String>,
}

impl LanguageTag {
    /// Parse a BCP-47 or POSIX style tag ("it-IT", "it_it", "ar-EG-u-nu-latn")
    fn parse(tag: &str) -> Option<Self> {
        let mut subtags = tag.trim().split(['-', '_']).peekable();

        let language = subtags.next()?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        let mut parsed = LanguageTag {
            language: language.to_ascii_lowercase(),
            script: None,
            region: None,
            numbering: None,
            calendar: None,
        };

        if let Some(script) =
            subtags.next_if(|s| s.len() == 4 && s.chars().all(|c| c.is_ascii_alphabetic()))
        {
            let mut chars = script.chars();
            let first = chars.next()?.to_ascii_uppercase();
            parsed.script = Some(std::iter::once(first).chain(chars.map(|c| c.to_ascii_lowercase())).collect());
        }

        if let Some(region) = subtags.next_if(|s| {
            (s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
                || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit()))
        }) {
            parsed.region = Some(region.to_ascii_uppercase());
        }

        // Only the Unicode extension is interpreted, variants are dropped
        let rest: Vec<String> = subtags.map(|s| s.to_ascii_lowercase()).collect();
        if let Some(start) = rest.iter().position(|s| s == "u") {
            let mut keys = rest[start + 1..].iter().take_while(|s| s.len() > 1);
            while let Some(key) = keys.next() {
                match key.as_str() {
                    "nu" => parsed.numbering = keys.next().cloned(),
                    "ca" => parsed.calendar = keys.next().cloned(),
                    _ => {}
                }
            }
        }

        Some(parsed)
    }

    fn base_name(&self) -> String {
        let mut name = self.language.clone();
        for part in [&self.script, &self.region].into_iter().flatten() {
            name.push('-');
            name.push_str(part);
        }
        name
    }
}

/// Whether the text reads as a plain ASCII integer prefix ("1815", "18:30", "6:30 pm")
///
/// Such text is always read with the default locale and `latn` digits,
/// whatever the caller requested, so ASCII input is never reinterpreted
/// through a localized digit set.
pub fn is_plain_digit_time(text: &str) -> bool {
    let text = text.trim_start();
    let text = text.strip_prefix(['+', '-']).unwrap_or(text);
    text.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Locale options to read `time` with
pub fn resolve_for_time(time: &str, opts: &TimepickerOptions) -> LocaleOptions {
    if is_plain_digit_time(time) {
        debug!("'{}' is plain digits, reading with {}", time, DEFAULT_LOCALE);
        return LocaleOptions::default();
    }
    resolve_locale_options(opts)
}

/// Negotiate the requested locale options against the process environment
pub fn resolve_locale_options(opts: &TimepickerOptions) -> LocaleOptions {
    resolve_with_system(opts, system_locale().as_deref())
}

fn resolve_with_system(opts: &TimepickerOptions, system: Option<&str>) -> LocaleOptions {
    let requested = opts.locale.as_deref().and_then(|locale| {
        let tag = LanguageTag::parse(locale);
        if tag.is_none() {
            debug!("Ignoring malformed locale '{}'", locale);
        }
        tag
    });

    let tag = requested
        .or_else(|| if opts.default_to_en { None } else { system.and_then(LanguageTag::parse) })
        .or_else(|| LanguageTag::parse(DEFAULT_LOCALE));

    let Some(tag) = tag else {
        return LocaleOptions::default();
    };

    let numbering_system = opts
        .numbering_system
        .as_deref()
        .and_then(|ns| ns.parse().ok())
        .or_else(|| tag.numbering.as_deref().and_then(|ns| ns.parse().ok()))
        .unwrap_or_else(|| NumberingSystem::default_for(&tag));

    let output_calendar = opts
        .output_calendar
        .as_deref()
        .map(str::to_ascii_lowercase)
        .filter(|ca| CALENDARS.contains(&ca.as_str()))
        .or_else(|| tag.calendar.clone().filter(|ca| CALENDARS.contains(&ca.as_str())))
        .unwrap_or_else(|| DEFAULT_CALENDAR.to_string());

    LocaleOptions { locale: tag.base_name(), numbering_system, output_calendar }
}

/// Locale of the POSIX environment ("it_IT.UTF-8" -> "it_IT")
fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.is_empty())
        .and_then(|value| {
            let name = value.split(['.', '@']).next().unwrap_or_default().to_string();
            (name != "C" && name != "POSIX" && !name.is_empty()).then_some(name)
        })
}
