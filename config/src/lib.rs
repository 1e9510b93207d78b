//! # Configuration Management for sqlfacade
//!
//! Settings that change how statements are rendered and which diagnostics
//! are logged while building them.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{AppConfig, DiagnosticsConfig, PlaceholderStyle, QueryConfig};
//!
//! let config = AppConfig {
//!     query: QueryConfig::new(PlaceholderStyle::Dollar),
//!     diagnostics: DiagnosticsConfig::new(3, true),
//! };
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [query]
//! placeholder_style = "question"
//!
//! [diagnostics]
//! one_to_many_join_warning = 5
//! log_join_summary = true
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from SQLFACADE_CONFIG, ./sqlfacade.toml or defaults
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./sqlfacade.toml";

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "SQLFACADE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// How bound values are written into the SQL text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderStyle {
    /// `?` for every value (MySQL, SQLite)
    #[default]
    Question,
    /// `$1`, `$2`, ... numbered in text order (PostgreSQL)
    Dollar,
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub query: QueryConfig,
    pub diagnostics: DiagnosticsConfig,
}

/// Statement rendering configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub placeholder_style: PlaceholderStyle,
}

/// Join diagnostics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Number of one-to-many joins in one select that triggers a warning
    pub one_to_many_join_warning: usize,
    /// Log the join summary of every select that has joins
    pub log_join_summary: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            one_to_many_join_warning: 5,
            log_join_summary: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from the TOML file named in the environment (or .env),
    /// then `./sqlfacade.toml`, falling back to defaults when neither exists
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }

        let config = if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            Self::from_file(&config_path)?
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text; missing sections take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.diagnostics.one_to_many_join_warning == 0 {
            return Err(ConfigError::Invalid(
                "Diagnostics one_to_many_join_warning must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl QueryConfig {
    /// Create a new query configuration
    pub fn new(placeholder_style: PlaceholderStyle) -> Self {
        Self { placeholder_style }
    }
}

impl DiagnosticsConfig {
    /// Create a new diagnostics configuration
    pub fn new(one_to_many_join_warning: usize, log_join_summary: bool) -> Self {
        Self {
            one_to_many_join_warning,
            log_join_summary,
        }
    }
}
