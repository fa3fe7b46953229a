//! Activity roster service binary.
//!
//! Wires configuration, logging, the activity registry, and the HTTP
//! server together, then serves until a shutdown signal arrives.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `roster-config.yaml` (or `$ROSTER_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the activity registry from the configured or built-in seed
//! 4. Serve the HTTP API until Ctrl-C / SIGTERM

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use roster_api::{AppState, ServerConfig};
use roster_core::config::{LogFormat, LoggingConfig};
use roster_core::{ActivityRegistry, RosterConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ServerBinError;

/// Default config file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "roster-config.yaml";

/// Application entry point for the roster server.
///
/// # Errors
///
/// Returns an error if configuration, logging, registry construction, or
/// the server itself fails.
#[tokio::main]
async fn main() -> Result<(), ServerBinError> {
    // 1. Load configuration.
    let config_path = std::env::var_os("ROSTER_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = RosterConfig::load_or_default(&config_path)?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;

    info!(
        config_path = %config_path.display(),
        host = config.http.host,
        port = config.http.port,
        custom_seed = config.activities.is_some(),
        "roster-server starting"
    );

    // 3. Build the registry.
    let registry = ActivityRegistry::new(config.seed_activities()?)?;
    info!(activity_count = registry.len().await, "Activity registry seeded");

    let mut state = AppState::new(registry);
    if let Some(dir) = &config.http.static_dir {
        state = state.with_static_dir(dir);
    }
    info!(static_dir = %state.static_dir.display(), "Serving web front-end");

    // 4. Serve.
    roster_api::start_server(&ServerConfig::from(&config.http), Arc::new(state)).await?;

    info!("roster-server exited cleanly");
    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `logging.level` when set.
fn init_logging(config: &LoggingConfig) -> Result<(), ServerBinError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ServerBinError::Logging {
            message: format!("invalid log level {:?}: {e}", config.level),
        })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    installed.map_err(|e| ServerBinError::Logging {
        message: e.to_string(),
    })
}
