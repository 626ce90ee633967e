//! Configuration management for the dashboard client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with LID_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Collection API configuration
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the REST collection API
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let environment = std::env::var("LID_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://localhost:1337/api")?
            .set_default("api.timeout_seconds", 30)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (LID_ prefix)
            .add_source(
                Environment::with_prefix("LID")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1337/api".to_string(),
            timeout_seconds: 30,
        }
    }
}
