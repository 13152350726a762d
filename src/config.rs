//! Configuration loading from TOML files and the environment.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Error, Result};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub shield: ShieldConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "autolot.db".into(),
            max_connections: 5,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

/// Enforcement mode for an edge-security rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShieldMode {
    Live,
    DryRun,
}

/// Declarative request-shielding rules, mirrored to the edge-security
/// service at deploy time. This crate validates and displays them; it
/// does not enforce them.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ShieldConfig {
    pub mode: ShieldMode,
    pub token_bucket: TokenBucketConfig,
    /// Bot categories exempt from blocking.
    pub bot_allow: Vec<String>,
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            mode: ShieldMode::DryRun,
            token_bucket: TokenBucketConfig::default(),
            bot_allow: vec!["search-engine".into()],
        }
    }
}

/// Per-client token bucket parameters.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenBucketConfig {
    /// Tokens added per interval.
    pub refill_rate: u32,
    pub interval_ms: u64,
    pub capacity: u32,
    /// Request attribute the bucket is keyed by.
    pub characteristic: String,
}

impl Default for TokenBucketConfig {
    fn default() -> Self {
        Self {
            refill_rate: 5,
            interval_ms: 10_000,
            capacity: 10,
            characteristic: "ip.src".into(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or from `autolot.toml` when present,
    /// falling back to defaults when no file exists.
    ///
    /// The `AUTOLOT_DATABASE_URL` environment variable overrides the
    /// configured database URL either way.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => {
                let default_path = Path::new("autolot.toml");
                if default_path.exists() {
                    Self::load(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        if let Ok(url) = std::env::var("AUTOLOT_DATABASE_URL") {
            if !url.is_empty() {
                config.database.url = url;
            }
        }
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.database.url.is_empty() {
            return Err(Error::Config(ConfigError::InvalidValue {
                field: "database.url",
                reason: "cannot be empty".into(),
            }));
        }
        if self.database.max_connections == 0 {
            return Err(Error::Config(ConfigError::InvalidValue {
                field: "database.max_connections",
                reason: "must be at least 1".into(),
            }));
        }
        if self.shield.token_bucket.capacity == 0 {
            return Err(Error::Config(ConfigError::InvalidValue {
                field: "shield.token_bucket.capacity",
                reason: "must be at least 1".into(),
            }));
        }
        if self.shield.token_bucket.interval_ms == 0 {
            return Err(Error::Config(ConfigError::InvalidValue {
                field: "shield.token_bucket.interval_ms",
                reason: "must be positive".into(),
            }));
        }
        Ok(())
    }
}
