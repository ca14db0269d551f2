//! Configuration management for the tracker
//!
//! This module handles loading and validation of all service configuration.

use crate::utils::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Catalog store configuration
    #[serde(default)]
    pub store: StoreConfig,
    /// External tariff-schedule configuration
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Cross-origin configuration for the web frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_true")]
    pub allow_credentials: bool,
}

/// Catalog store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the catalog JSON document
    #[serde(default = "default_store_path")]
    pub path: String,
}

/// External tariff-schedule publication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// URL of the published tariff-schedule JSON
    #[serde(default = "default_schedule_url")]
    pub url: String,
    /// Fetch timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Human-readable label for the publication
    #[serde(default = "default_data_source")]
    pub data_source: String,
    /// Edition marker reported as `last_updated` in tariff-info responses
    #[serde(default = "default_edition")]
    pub edition: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_true() -> bool {
    true
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "https://tarifftaxiq.org".to_string(),
        "https://www.tarifftaxiq.org".to_string(),
    ]
}

fn default_store_path() -> String {
    "data/products.json".to_string()
}

fn default_schedule_url() -> String {
    "https://www.usitc.gov/sites/default/files/tata/hts/hts_2024_basic_edition_json.json"
        .to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_data_source() -> String {
    "USITC HTS 2024".to_string()
}

fn default_edition() -> String {
    "2024".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: default_allowed_origins(),
            allow_credentials: true,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            url: default_schedule_url(),
            timeout_secs: default_timeout_secs(),
            data_source: default_data_source(),
            edition: default_edition(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TrackerError::config(format!("Failed to read config file: {}", e)))?;

        let mut config: Config = serde_yaml::from_str(&content)
            .map_err(|e| TrackerError::config(format!("Failed to parse config: {}", e)))?;

        config.apply_env_overrides();
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Apply environment-variable overrides on top of file or default values
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("TRACKER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("TRACKER_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(path) = std::env::var("TRACKER_STORE_PATH") {
            self.store.path = path;
        }
        if let Ok(url) = std::env::var("TRACKER_SCHEDULE_URL") {
            self.schedule.url = url;
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        if self.server.port == 0 {
            return Err(TrackerError::config("Server port must be non-zero"));
        }

        if self.store.path.trim().is_empty() {
            return Err(TrackerError::config("Catalog store path must not be empty"));
        }

        url::Url::parse(&self.schedule.url)
            .map_err(|e| TrackerError::config(format!("Invalid schedule URL: {}", e)))?;

        if self.schedule.timeout_secs == 0 {
            return Err(TrackerError::config("Schedule timeout must be non-zero"));
        }

        debug!("Configuration validation completed");
        Ok(())
    }
}
