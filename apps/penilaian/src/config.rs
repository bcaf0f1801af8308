//! # Configuration
//!
//! Server settings are read from an optional TOML file, then overridden by
//! environment variables, then by CLI flags.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! rate_limit = 100
//! cors_origins = ["https://awards.example.org"]
//! ```
//!
//! ## Environment Overrides
//!
//! - `PENILAIAN_RATE_LIMIT`: Requests per second (0 disables limiting)
//! - `PENILAIAN_CORS_ORIGINS`: Comma-separated origins, or "*" for all
//!
//! The API key is never read from the file; see `PENILAIAN_API_KEY` in
//! the `api::auth` module.

use penilaian_core::PenilaianError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default rate limit in requests per second.
pub const DEFAULT_RATE_LIMIT: u32 = 100;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests per second; 0 disables rate limiting.
    pub rate_limit: u32,
    /// Allowed CORS origins. `None` means localhost only; `["*"]` allows all.
    pub cors_origins: Option<Vec<String>>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            rate_limit: DEFAULT_RATE_LIMIT,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// The `host:port` bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, PenilaianError> {
        toml::from_str(content).map_err(|e| PenilaianError::ConfigError(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, PenilaianError> {
        if !path.exists() {
            tracing::debug!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            PenilaianError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Apply `PENILAIAN_*` environment overrides.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(rate) = std::env::var("PENILAIAN_RATE_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.server.rate_limit = rate;
        }

        if let Ok(origins) = std::env::var("PENILAIAN_CORS_ORIGINS") {
            let origins: Vec<String> = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !origins.is_empty() {
                self.server.cors_origins = Some(origins);
            }
        }

        self
    }
}
