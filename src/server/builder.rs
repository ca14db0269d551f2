//! Server startup with automatic configuration loading

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Default configuration file path, overridable via `TRACKER_CONFIG`
const DEFAULT_CONFIG_PATH: &str = "config/tracker.yaml";

/// Run the server with automatic configuration loading
///
/// Falls back to the built-in defaults (plus environment overrides) when the
/// configuration file is absent, matching first-run behavior.
pub async fn run_server() -> Result<()> {
    let config_path =
        std::env::var("TRACKER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let config = match Config::from_file(&config_path).await {
        Ok(config) => config,
        Err(e) => {
            info!(
                "Configuration file not loaded ({}), using default config",
                e
            );
            let mut config = Config::default();
            config.apply_env_overrides();
            config.validate()?;
            config
        }
    };

    let server = HttpServer::new(&config)?;
    info!(
        "Tariff Tracker API starting at http://{}:{}",
        config.server.host, config.server.port
    );

    server.start().await
}
