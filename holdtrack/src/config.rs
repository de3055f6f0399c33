//! Engine configuration.
//!
//! Settings can be built in code or read from an INI file:
//!
//! ```ini
//! [hold]
//! ; minutes between hold entry and the synthetic exit estimate
//! duration_minutes = 10
//! ; fixes that always start a hold, in addition to configured hold points
//! fixes = RIVET, BOREE
//! ; notification channel capacity
//! event_capacity = 64
//! ```

use std::path::Path;

use chrono::Duration;
use ini::Ini;
use thiserror::Error;

use crate::hold_points::normalize_name;

/// Default time between hold entry and the exit estimate.
pub const DEFAULT_HOLD_DURATION_MINUTES: u32 = 10;

/// Default capacity of the notification broadcast channel.
///
/// Subscribers that fall further behind than this see a lag and should
/// simply re-pull the current state.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

const SECTION_HOLD: &str = "hold";
const KEY_DURATION: &str = "duration_minutes";
const KEY_FIXES: &str = "fixes";
const KEY_EVENT_CAPACITY: &str = "event_capacity";

/// Errors loading engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    /// The text could not be parsed.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] ini::ParseError),

    /// A key holds a value of the wrong shape.
    #[error("Invalid value for '{key}': {value}")]
    InvalidValue { key: &'static str, value: String },
}

impl From<ini::Error> for ConfigError {
    fn from(err: ini::Error) -> Self {
        match err {
            ini::Error::Io(err) => ConfigError::Read(err),
            ini::Error::Parse(err) => ConfigError::Parse(err),
        }
    }
}

/// Settings for [`crate::HoldEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Minutes added to the entry estimate to get the exit estimate.
    pub hold_duration_minutes: u32,

    /// Fixes that start a hold even when not configured as hold points.
    ///
    /// Empty by default: only configured hold points are detected.
    pub hold_fixes: Vec<String>,

    /// Capacity of the notification channel.
    pub event_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hold_duration_minutes: DEFAULT_HOLD_DURATION_MINUTES,
            hold_fixes: Vec::new(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Configuration with every default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hold duration.
    pub fn with_hold_duration_minutes(mut self, minutes: u32) -> Self {
        self.hold_duration_minutes = minutes;
        self
    }

    /// Add a fix that always starts a hold.
    pub fn with_hold_fix(mut self, fix: &str) -> Self {
        let fix = normalize_name(fix);
        if !fix.is_empty() && !self.hold_fixes.contains(&fix) {
            self.hold_fixes.push(fix);
        }
        self
    }

    /// Set the notification channel capacity.
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Hold duration as a `chrono` duration.
    pub fn hold_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.hold_duration_minutes))
    }

    /// Load configuration from an INI file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path)?;
        Self::from_ini(&ini)
    }

    /// Parse configuration from INI text.
    pub fn from_ini_str(text: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(text)?;
        Self::from_ini(&ini)
    }

    /// Build configuration from a parsed INI document.
    ///
    /// Missing keys keep their defaults.
    pub fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let Some(section) = ini.section(Some(SECTION_HOLD)) else {
            return Ok(config);
        };

        if let Some(value) = section.get(KEY_DURATION) {
            config.hold_duration_minutes = parse_value(KEY_DURATION, value)?;
        }

        if let Some(value) = section.get(KEY_EVENT_CAPACITY) {
            config.event_capacity = parse_value(KEY_EVENT_CAPACITY, value)?;
            if config.event_capacity == 0 {
                return Err(ConfigError::InvalidValue {
                    key: KEY_EVENT_CAPACITY,
                    value: value.to_string(),
                });
            }
        }

        if let Some(value) = section.get(KEY_FIXES) {
            for fix in value.split(',') {
                config = config.with_hold_fix(fix);
            }
        }

        Ok(config)
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.hold_duration_minutes, 10);
        assert_eq!(config.hold_duration(), Duration::minutes(10));
        assert!(config.hold_fixes.is_empty());
        assert_eq!(config.event_capacity, DEFAULT_EVENT_CAPACITY);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_hold_duration_minutes(15)
            .with_hold_fix(" rivet ")
            .with_hold_fix("RIVET")
            .with_hold_fix("");
        assert_eq!(config.hold_duration(), Duration::minutes(15));
        assert_eq!(config.hold_fixes, vec!["RIVET".to_string()]);
    }

    #[test]
    fn test_from_ini_str() {
        let config = EngineConfig::from_ini_str(
            "[hold]\nduration_minutes = 12\nfixes = RIVET, boree\nevent_capacity = 8\n",
        )
        .unwrap();
        assert_eq!(config.hold_duration_minutes, 12);
        assert_eq!(config.hold_fixes, vec!["RIVET", "BOREE"]);
        assert_eq!(config.event_capacity, 8);
    }

    #[test]
    fn test_missing_section_keeps_defaults() {
        let config = EngineConfig::from_ini_str("[other]\nkey = value\n").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_invalid_duration() {
        let err = EngineConfig::from_ini_str("[hold]\nduration_minutes = ten\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "duration_minutes",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_event_capacity_rejected() {
        let err = EngineConfig::from_ini_str("[hold]\nevent_capacity = 0\n").unwrap_err();
        assert!(err.to_string().contains("event_capacity"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[hold]").unwrap();
        writeln!(file, "duration_minutes = 20").unwrap();
        writeln!(file, "fixes = MARLN").unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.hold_duration_minutes, 20);
        assert_eq!(config.hold_fixes, vec!["MARLN"]);
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[hold").unwrap();
        writeln!(file, "duration_minutes = 20").unwrap();

        let err = EngineConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse config"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load("/nonexistent/holdtrack.ini").unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
