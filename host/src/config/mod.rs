//! Configuration management for the HealthTrack host
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: HT__)

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use healthtrack_shared::DashboardGoals;
use serde::{Deserialize, Serialize};

/// Host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    pub store: StoreConfig,
    #[serde(default)]
    pub goals: DashboardGoals,
    pub logging: LoggingConfig,
}

/// Profile store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON file holding the array of user records
    pub path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub filter: String,
    /// Emit JSON lines instead of pretty output
    pub json: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                path: PathBuf::from("data/users.json"),
            },
            goals: DashboardGoals::default(),
            logging: LoggingConfig {
                filter: "healthtrack_host=info,healthtrack_shared=info".to_string(),
                json: false,
            },
        }
    }
}

impl HostConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with HT__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        Self::load_from(&format!("config/{}.toml", env))
    }

    /// Same layering as [`HostConfig::load`] with an explicit config file
    pub fn load_from(config_file: &str) -> Result<Self> {
        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&HostConfig::default())?)
            .add_source(config::File::with_name(config_file).required(false))
            // e.g., HT__GOALS__CALORIES=1800 sets goals.calories
            .add_source(config::Environment::with_prefix("HT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
