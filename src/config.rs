use crate::availability::AvailabilityConstraint;
use crate::compare::Granularity;
use crate::format::TimeFormat;
use crate::options::TimepickerOptions;
use crate::time_value::TimeValue;
use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub constraints: ConstraintConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PickerConfig {
    pub locale: Option<String>,
    pub numbering_system: Option<String>,
    pub output_calendar: Option<String>,
    #[serde(default = "default_to_en")]
    pub default_to_en: bool,
    #[serde(default)]
    pub format: TimeFormat,
    /// IANA zone name, e.g. "Europe/Rome"
    pub zone: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConstraintConfig {
    pub min: Option<String>,
    pub max: Option<String>,
    pub granularity: Option<Granularity>,
    pub minutes_gap: Option<u32>,
}

fn default_to_en() -> bool {
    true
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            locale: None,
            numbering_system: None,
            output_calendar: None,
            default_to_en: true,
            format: TimeFormat::Twelve,
            zone: None,
        }
    }
}

impl PickerConfig {
    pub fn to_options(&self) -> Result<TimepickerOptions> {
        let zone = match &self.zone {
            Some(name) => Some(
                name.parse::<Tz>().map_err(|e| anyhow!("Invalid zone '{}': {}", name, e))?,
            ),
            None => None,
        };

        Ok(TimepickerOptions {
            format: self.format,
            locale: self.locale.clone(),
            numbering_system: self.numbering_system.clone(),
            output_calendar: self.output_calendar.clone(),
            default_to_en: self.default_to_en,
            zone,
        })
    }
}

impl ConstraintConfig {
    /// Read the configured bounds with `opts`; an unreadable bound is an error
    pub fn to_constraint(&self, opts: &TimepickerOptions) -> Result<AvailabilityConstraint> {
        let parse_bound = |name: &str, text: &Option<String>| -> Result<Option<TimeValue>> {
            text.as_deref()
                .map(|t| TimeValue::parse(t, opts).with_context(|| format!("Invalid {} time", name)))
                .transpose()
        };

        Ok(AvailabilityConstraint {
            min: parse_bound("min", &self.min)?,
            max: parse_bound("max", &self.max)?,
            granularity: self.granularity,
            minutes_gap: self.minutes_gap,
        })
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "timepicker", "timepicker")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.picker.default_to_en);
        assert_eq!(config.picker.format, TimeFormat::Twelve);
        assert!(config.constraints.min.is_none());
        assert!(config.constraints.minutes_gap.is_none());
    }

    #[test]
    fn test_config_save_load() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.picker.locale = Some("it-IT".to_string());
        config.picker.format = TimeFormat::TwentyFour;
        config.constraints.min = Some("14:00".to_string());
        config.constraints.granularity = Some(Granularity::Hours);
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.picker.locale, config.picker.locale);
        assert_eq!(loaded.picker.format, TimeFormat::TwentyFour);
        assert_eq!(loaded.constraints.min.as_deref(), Some("14:00"));
        assert_eq!(loaded.constraints.granularity, Some(Granularity::Hours));

        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() -> Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[constraints]\nminutes_gap = 15\nmax = \"6:00 pm\"\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert!(loaded.picker.default_to_en);
        assert_eq!(loaded.picker.format, TimeFormat::Twelve);

        let opts = loaded.picker.to_options()?;
        let constraint = loaded.constraints.to_constraint(&opts)?;
        assert_eq!(constraint.minutes_gap, Some(15));
        assert_eq!(constraint.max.map(|t| t.hour()), Some(18));
        assert!(constraint.min.is_none());

        Ok(())
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let picker = PickerConfig { zone: Some("Mars/Olympus".to_string()), ..PickerConfig::default() };
        assert!(picker.to_options().is_err());

        let constraints = ConstraintConfig { min: Some("25:99".to_string()), ..ConstraintConfig::default() };
        let err = constraints.to_constraint(&TimepickerOptions::default()).unwrap_err();
        assert!(err.to_string().contains("min"));
    }

    #[test]
    fn test_zone_is_parsed() -> Result<()> {
        let picker = PickerConfig { zone: Some("Europe/Rome".to_string()), ..PickerConfig::default() };
        assert_eq!(picker.to_options()?.zone, Some(chrono_tz::Europe::Rome));
        Ok(())
    }
}
