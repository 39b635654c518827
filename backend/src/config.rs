//! Configuration management for the FertiSense backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FERTISENSE_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Crop catalog configuration
    pub catalog: CatalogConfig,

    /// Realtime sensor feed configuration
    pub sensor_feed: SensorFeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Path to the crop catalog CSV file
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SensorFeedConfig {
    /// Whether the background poller is started at all
    pub enabled: bool,

    /// Base URL of the realtime database REST endpoint
    pub base_url: String,

    /// Path of the latest-readings node, appended to the base URL
    pub readings_path: String,

    /// Seconds between polls
    pub poll_interval_secs: u64,

    /// Readings older than this are reported as offline
    pub stale_after_secs: i64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FERTISENSE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("catalog.path", "data/crops.csv")?
            .set_default("sensor_feed.enabled", false)?
            .set_default("sensor_feed.base_url", "")?
            .set_default("sensor_feed.readings_path", "/readings/latest.json")?
            .set_default("sensor_feed.poll_interval_secs", 10)?
            .set_default("sensor_feed.stale_after_secs", 30)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FERTISENSE_ prefix)
            .add_source(
                Environment::with_prefix("FERTISENSE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
