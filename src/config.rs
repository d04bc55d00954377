use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::constants;
use crate::error::{MapperError, Result};
use crate::mapping::Schema;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub ingest: IngestConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct IngestConfig {
    pub equity_endpoint: String,
    pub forex_endpoint: String,
    pub timeout_seconds: u64,
    /// Records per request; 0 sends a whole file in one request
    pub batch_size: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            equity_endpoint: constants::DEFAULT_EQUITY_ENDPOINT.to_string(),
            forex_endpoint: constants::DEFAULT_FOREX_ENDPOINT.to_string(),
            timeout_seconds: constants::DEFAULT_TIMEOUT_SECONDS,
            batch_size: 0,
        }
    }
}

impl IngestConfig {
    pub fn endpoint_for(&self, schema: Schema) -> &str {
        match schema {
            Schema::Equity => &self.equity_endpoint,
            Schema::Forex => &self.forex_endpoint,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    /// Reads `path` when it exists (defaults otherwise), then applies
    /// environment overrides, including any from a `.env` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        dotenv::dotenv().ok();

        let mut config = if path.exists() {
            let config_content = fs::read_to_string(path).map_err(|e| {
                MapperError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
            })?;
            Self::from_toml(&config_content)?
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Config::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(v) = env::var(constants::ENV_EQUITY_ENDPOINT) {
            self.ingest.equity_endpoint = v;
        }
        if let Ok(v) = env::var(constants::ENV_FOREX_ENDPOINT) {
            self.ingest.forex_endpoint = v;
        }
        if let Ok(v) = env::var(constants::ENV_TIMEOUT_SECONDS) {
            self.ingest.timeout_seconds = v.trim().parse().map_err(|_| {
                MapperError::Config(format!("{} must be a whole number, got '{}'", constants::ENV_TIMEOUT_SECONDS, v))
            })?;
        }
        if let Ok(v) = env::var(constants::ENV_BATCH_SIZE) {
            self.ingest.batch_size = v.trim().parse().map_err(|_| {
                MapperError::Config(format!("{} must be a whole number, got '{}'", constants::ENV_BATCH_SIZE, v))
            })?;
        }
        Ok(())
    }
}
