//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::models::ScoringMetric;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Standings output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsConfig {
    /// Prefix team labels with their rank ("1 Alpha")
    #[serde(default = "default_numbered_names")]
    pub numbered_names: bool,

    /// Metric codes ranked by when the command line names none
    #[serde(default)]
    pub default_metrics: Vec<String>,
}

fn default_numbered_names() -> bool {
    true
}

impl Default for StandingsConfig {
    fn default() -> Self {
        Self {
            numbered_names: default_numbered_names(),
            default_metrics: Vec::new(),
        }
    }
}

impl StandingsConfig {
    /// Parse the configured metric codes.
    pub fn metrics(&self) -> Result<Vec<ScoringMetric>, ConfigError> {
        self.default_metrics
            .iter()
            .map(|code| {
                code.parse::<ScoringMetric>()
                    .map_err(|e| ConfigError::ValidationError(format!("{}", e)))
            })
            .collect()
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub standings: StandingsConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            standings: StandingsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, using defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("No config file at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Unknown log level: {}",
                self.log_level
            )));
        }

        self.standings.metrics()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_level, "info");
        assert!(config.standings.numbered_names);
        assert!(config.standings.default_metrics.is_empty());
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_log_level() {
        let mut config = AppConfig::default();
        config.log_level = "loud".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_metric() {
        let mut config = AppConfig::default();
        config.standings.default_metrics = vec!["TOTAL".to_string(), "WLT".to_string()];

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_standings_metrics() {
        let standings = StandingsConfig {
            numbered_names: false,
            default_metrics: vec!["average".to_string(), "BEST_P".to_string()],
        };

        assert_eq!(
            standings.metrics().unwrap(),
            vec![ScoringMetric::Average, ScoringMetric::BestFinish]
        );
    }

    #[test]
    fn test_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/srv/standings\"\n\n[standings]\nnumbered_names = false\ndefault_metrics = [\"TOTAL\"]\n",
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/standings"));
        assert_eq!(config.log_level, "info");
        assert!(!config.standings.numbered_names);
        assert_eq!(config.standings.metrics().unwrap(), vec![ScoringMetric::Total]);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        // Should be parseable
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.data_dir, parsed.data_dir);
        assert_eq!(config.standings.numbered_names, parsed.standings.numbered_names);
    }
}
