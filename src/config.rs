use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub collector: Option<CollectorConfig>,
    pub logging: Option<LoggingConfig>,
}

/// Knobs for the scroll-collection loop. Every field is optional in the
/// file; accessors resolve the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    pub max_scrolls: Option<u32>,
    pub stable_rounds: Option<u32>,
    pub scroll_pause_ms: Option<u64>,
    pub top_n: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            max_scrolls: Some(40),
            stable_rounds: Some(3),
            scroll_pause_ms: Some(1300),
            top_n: Some(10),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Some("info".to_string()),
        }
    }
}

impl CollectorConfig {
    /// Scroll budget for one run; the loop always terminates by this bound.
    pub fn max_scrolls(&self) -> u32 {
        self.max_scrolls.unwrap_or(40)
    }

    /// Consecutive rounds without new unique videos before the run is
    /// considered converged.
    pub fn stable_rounds(&self) -> u32 {
        self.stable_rounds.unwrap_or(3)
    }

    /// Pause between scroll steps, giving the page time to render newly
    /// loaded results before the next read.
    pub fn scroll_pause_ms(&self) -> u64 {
        self.scroll_pause_ms.unwrap_or(1300)
    }

    /// Size of the most-viewed list in the run summary.
    pub fn top_n(&self) -> usize {
        self.top_n.unwrap_or(10)
    }
}

impl Config {
    /// Load configuration from a TOML file with XDG directory support and
    /// environment variable overrides. A missing file is not an error:
    /// every setting has a default.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config_file = if let Some(path) = config_path {
            path
        } else {
            Self::find_config_file()
        };

        let mut config = if config_file.exists() {
            tracing::debug!("Loading config from: {}", config_file.display());
            let content = std::fs::read_to_string(&config_file)?;
            toml::from_str::<Config>(&content)?
        } else {
            tracing::debug!("No config file found, using defaults and environment variables");
            Config::default()
        };

        config.apply_env_overrides()?;

        // Fill in optional sections
        if config.collector.is_none() {
            config.collector = Some(CollectorConfig::default());
        }
        if config.logging.is_none() {
            config.logging = Some(LoggingConfig::default());
        }

        config.validate()?;

        Ok(config)
    }

    /// Resolved collector section.
    pub fn collector(&self) -> CollectorConfig {
        self.collector.clone().unwrap_or_default()
    }

    /// Resolved logging section.
    pub fn logging(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }

    /// Find the configuration file: `VIEWTALLY_CONFIG`, then the current
    /// directory, then `XDG_CONFIG_HOME/viewtally/viewtally.toml` (with the
    /// usual `~/.config` fallback).
    fn find_config_file() -> PathBuf {
        if let Ok(path) = env::var("VIEWTALLY_CONFIG") {
            return PathBuf::from(path);
        }

        let current_dir_config = PathBuf::from("viewtally.toml");
        if current_dir_config.exists() {
            return current_dir_config;
        }

        let xdg_config = if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg_config_home)
                .join("viewtally")
                .join("viewtally.toml")
        } else if let Ok(home_dir) = env::var("HOME") {
            PathBuf::from(home_dir)
                .join(".config")
                .join("viewtally")
                .join("viewtally.toml")
        } else {
            PathBuf::new() // invalid path that won't exist
        };

        if xdg_config.exists() {
            return xdg_config;
        }

        // Default to the current directory (file may not exist yet)
        current_dir_config
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(max_scrolls) = env::var("VIEWTALLY_MAX_SCROLLS") {
            let collector = self.collector.get_or_insert_with(CollectorConfig::default);
            collector.max_scrolls = Some(max_scrolls.parse().map_err(|_| {
                ConfigError::InvalidValue(
                    "VIEWTALLY_MAX_SCROLLS must be a valid number".to_string(),
                )
            })?);
        }
        if let Ok(stable_rounds) = env::var("VIEWTALLY_STABLE_ROUNDS") {
            let collector = self.collector.get_or_insert_with(CollectorConfig::default);
            collector.stable_rounds = Some(stable_rounds.parse().map_err(|_| {
                ConfigError::InvalidValue(
                    "VIEWTALLY_STABLE_ROUNDS must be a valid number".to_string(),
                )
            })?);
        }
        if let Ok(scroll_pause_ms) = env::var("VIEWTALLY_SCROLL_PAUSE_MS") {
            let collector = self.collector.get_or_insert_with(CollectorConfig::default);
            collector.scroll_pause_ms = Some(scroll_pause_ms.parse().map_err(|_| {
                ConfigError::InvalidValue(
                    "VIEWTALLY_SCROLL_PAUSE_MS must be a valid number".to_string(),
                )
            })?);
        }
        if let Ok(top_n) = env::var("VIEWTALLY_TOP_N") {
            let collector = self.collector.get_or_insert_with(CollectorConfig::default);
            collector.top_n = Some(top_n.parse().map_err(|_| {
                ConfigError::InvalidValue("VIEWTALLY_TOP_N must be a valid number".to_string())
            })?);
        }
        if let Ok(level) = env::var("VIEWTALLY_LOG_LEVEL") {
            let logging = self.logging.get_or_insert_with(LoggingConfig::default);
            logging.level = Some(level);
        }

        Ok(())
    }

    /// Validate resolved values. The scroll budget and the stability
    /// threshold both have to be at least 1 or the loop semantics collapse.
    fn validate(&self) -> Result<(), ConfigError> {
        let collector = self.collector();
        if collector.max_scrolls() == 0 {
            return Err(ConfigError::InvalidValue(
                "collector.max_scrolls must be at least 1".to_string(),
            ));
        }
        if collector.stable_rounds() == 0 {
            return Err(ConfigError::InvalidValue(
                "collector.stable_rounds must be at least 1".to_string(),
            ));
        }

        if let Some(ref level) = self.logging().level {
            match level.to_lowercase().as_str() {
                "error" | "warn" | "info" | "debug" | "trace" => {}
                _ => {
                    return Err(ConfigError::InvalidValue(format!(
                        "logging.level must be one of error, warn, info, debug, trace (got {level})"
                    )));
                }
            }
        }

        Ok(())
    }
}
