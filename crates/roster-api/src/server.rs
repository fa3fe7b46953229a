//! Listener setup and serve loop for the roster API.
//!
//! Startup is split in two so callers can bind first (and learn the real
//! port when asking for port 0), then serve until a shutdown future
//! resolves. [`start_server`] composes both with a Ctrl-C / SIGTERM
//! shutdown for the binary.

use std::future::Future;
use std::io;
use std::sync::Arc;

use roster_core::config::HttpConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Where the roster API listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host name or IP address to bind (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port; `0` asks the OS for a free one.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from(&HttpConfig::default())
    }
}

impl From<&HttpConfig> for ServerConfig {
    fn from(http: &HttpConfig) -> Self {
        Self {
            host: http.host.clone(),
            port: http.port,
        }
    }
}

/// Bind the roster listener described by `config`.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the host does not resolve or the
/// port cannot be bound.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|source| ServerError::Bind {
            address: format!("{}:{}", config.host, config.port),
            source,
        })?;

    match listener.local_addr() {
        Ok(addr) => info!(%addr, "Roster API listening"),
        Err(e) => info!(
            host = %config.host,
            port = config.port,
            error = %e,
            "Roster API listening"
        ),
    }
    Ok(listener)
}

/// Serve the roster API on `listener` until `shutdown` resolves.
///
/// Requests already in flight when `shutdown` fires are allowed to
/// finish before this returns.
///
/// # Errors
///
/// Returns [`ServerError::Serve`] if the accept loop fails.
pub async fn serve_until<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Roster API stopped");
    Ok(())
}

/// Bind and serve until Ctrl-C (or SIGTERM on Unix).
///
/// # Errors
///
/// Returns an error if the listener cannot bind or serving fails.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let listener = bind(config).await?;
    serve_until(listener, state, shutdown_signal()).await
}

/// Resolve when the process is asked to stop.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Cannot install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Cannot install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown requested, draining in-flight requests");
}

/// Failures while binding or running the roster API.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listen address did not resolve or could not be bound.
    #[error("cannot listen on {address}: {source}")]
    Bind {
        /// The `host:port` that was requested.
        address: String,
        /// The underlying socket error.
        source: io::Error,
    },

    /// The accept loop failed after the listener was up.
    #[error("roster API stopped unexpectedly: {source}")]
    Serve {
        /// The underlying I/O error.
        #[from]
        source: io::Error,
    },
}
