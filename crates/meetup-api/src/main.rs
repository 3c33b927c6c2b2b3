//! Meetup API binary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `meetup-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Build the router
//! 4. Serve until `Ctrl-C`

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use meetup_api::{build_router, init_tracing, start_server, ApiConfig, AppState, ConfigError};
use tracing::info;

const CONFIG_PATH: &str = "meetup-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, logging setup, or the server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, from_file) = load_config()?;
    init_tracing(&config.logging)?;

    info!(
        config_file = from_file,
        host = config.server.host,
        port = config.server.port,
        log_level = config.logging.level,
        "meetup-api starting"
    );

    let state = Arc::new(AppState::default());
    let router = build_router(Router::new(), state);

    start_server(&config.server, router).await?;

    Ok(())
}

/// Load `meetup-config.yaml` if it exists, otherwise defaults plus env.
fn load_config() -> Result<(ApiConfig, bool), ConfigError> {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        Ok((ApiConfig::from_file(path)?, true))
    } else {
        let mut config = ApiConfig::default();
        config.apply_env_overrides()?;
        Ok((config, false))
    }
}
