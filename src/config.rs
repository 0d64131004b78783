//! Service configuration
//!
//! A single JSON file with three optional sections. Every field has a
//! default, so `{}` (or no file at all) yields a working configuration.
//!
//! ```json
//! {
//!   "http": { "host": "0.0.0.0", "port": 6969, "cors_origins": ["http://localhost:2233"] },
//!   "database": { "path": "./pes-people-2024-11-01.db", "read_only": true },
//!   "logging": { "level": "info", "format": "json" }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::HttpServerConfig;
use crate::observability::LoggingConfig;
use crate::store::DatabaseConfig;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RollcallConfig {
    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RollcallConfig {
    /// Load and validate configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: RollcallConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Invalid("http.port must be > 0".to_string()));
        }

        if self.http.host.is_empty() {
            return Err(ConfigError::Invalid("http.host must not be empty".to_string()));
        }

        for origin in &self.http.cors_origins {
            if HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::Invalid(format!(
                    "http.cors_origins contains invalid origin '{}'",
                    origin
                )));
            }
        }

        if self.database.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "database.path must not be empty".to_string(),
            ));
        }

        if self.database.allowed_tables.iter().any(|t| t.is_empty()) {
            return Err(ConfigError::Invalid(
                "database.allowed_tables must not contain empty names".to_string(),
            ));
        }

        Ok(())
    }
}
