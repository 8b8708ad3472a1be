use crate::domain::{DirectionMode, Truncation};
use crate::trade::controller::ShowCounts;
use dotenv::dotenv;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_DATA_PATH: &str = "data/trades_full.csv";
pub const DEFAULT_LOG_FILE: &str = "coffee-trade.log";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TRADE_YEAR must be a year, got {0:?}")]
    InvalidYear(String),
    #[error("DIRECTION_MODE must be export or import, got {0:?}")]
    InvalidMode(String),
    #[error("{variable} must be a count or \"all\", got {value:?}")]
    InvalidShowCount { variable: &'static str, value: String },
}

/// Runtime settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub coords_path: Option<PathBuf>,
    pub year: Option<i32>,
    pub direction_mode: DirectionMode,
    pub show_counts: ShowCounts,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            coords_path: None,
            year: None,
            direction_mode: DirectionMode::Import,
            show_counts: ShowCounts::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Builds the config from any variable source. Unset or blank
    /// variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let year = read("TRADE_YEAR")
            .map(|value| value.parse::<i32>().map_err(|_| ConfigError::InvalidYear(value)))
            .transpose()?;

        let direction_mode = match read("DIRECTION_MODE") {
            Some(value) => DirectionMode::parse(&value).ok_or(ConfigError::InvalidMode(value))?,
            None => defaults.direction_mode,
        };

        let show_counts = ShowCounts {
            hoverless: show_count(&read, "HOVERLESS_SHOW_COUNT", defaults.show_counts.hoverless)?,
            hovered: show_count(&read, "HOVERED_SHOW_COUNT", defaults.show_counts.hovered)?,
        };

        Ok(Self {
            data_path: read("TRADE_DATA").map_or(defaults.data_path, PathBuf::from),
            coords_path: read("COORDINATES_FILE").map(PathBuf::from),
            year,
            direction_mode,
            show_counts,
            log_level: read("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_file: read("LOG_FILE").map(PathBuf::from),
        })
    }

    /// Where logs go: the configured file, else the default file when the
    /// dashboard owns the terminal, else stderr (`None`).
    pub fn log_target(&self, headless: bool) -> Option<&Path> {
        match &self.log_file {
            Some(path) => Some(path.as_path()),
            None if headless => None,
            None => Some(Path::new(DEFAULT_LOG_FILE)),
        }
    }
}

fn show_count(
    read: &impl Fn(&str) -> Option<String>,
    variable: &'static str,
    default: Truncation,
) -> Result<Truncation, ConfigError> {
    match read(variable) {
        Some(value) => {
            Truncation::parse(&value).ok_or(ConfigError::InvalidShowCount { variable, value })
        }
        None => Ok(default),
    }
}

/// Loads `.env` and reads the process environment.
pub fn init_app_config() -> Result<AppConfig, ConfigError> {
    dotenv().ok();
    AppConfig::from_lookup(|key| env::var(key).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, Ok(AppConfig::default()));

        let config = AppConfig::default();
        assert_eq!(config.direction_mode, DirectionMode::Import);
        assert_eq!(config.show_counts.hoverless, Truncation::Top(2));
        assert_eq!(config.show_counts.hovered, Truncation::Top(10));
        assert_eq!(config.data_path, PathBuf::from("data/trades_full.csv"));
    }

    #[test]
    fn variables_override_defaults() -> Result<(), ConfigError> {
        let config = AppConfig::from_lookup(lookup(&[
            ("TRADE_DATA", "fixtures/coffee.json"),
            ("COORDINATES_FILE", "coords.json"),
            ("TRADE_YEAR", " 2015 "),
            ("DIRECTION_MODE", "export"),
            ("HOVERLESS_SHOW_COUNT", "5"),
            ("HOVERED_SHOW_COUNT", "all"),
            ("LOG_LEVEL", "debug"),
            ("LOG_FILE", ""),
        ]))?;

        assert_eq!(config.data_path, PathBuf::from("fixtures/coffee.json"));
        assert_eq!(config.coords_path, Some(PathBuf::from("coords.json")));
        assert_eq!(config.year, Some(2015));
        assert_eq!(config.direction_mode, DirectionMode::Export);
        assert_eq!(config.show_counts.hoverless, Truncation::Top(5));
        assert_eq!(config.show_counts.hovered, Truncation::All);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, None);
        Ok(())
    }

    #[test]
    fn invalid_values_are_reported() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("TRADE_YEAR", "latest")])),
            Err(ConfigError::InvalidYear("latest".to_string()))
        );
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("DIRECTION_MODE", "both")])),
            Err(ConfigError::InvalidMode("both".to_string()))
        );
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("HOVERED_SHOW_COUNT", "-3")])),
            Err(ConfigError::InvalidShowCount {
                variable: "HOVERED_SHOW_COUNT",
                value: "-3".to_string(),
            })
        );
    }

    #[test]
    fn log_target_depends_on_mode() {
        let config = AppConfig::default();
        assert_eq!(config.log_target(true), None);
        assert_eq!(config.log_target(false), Some(Path::new(DEFAULT_LOG_FILE)));

        let config = AppConfig {
            log_file: Some(PathBuf::from("trade.log")),
            ..AppConfig::default()
        };
        assert_eq!(config.log_target(true), Some(Path::new("trade.log")));
    }
}
