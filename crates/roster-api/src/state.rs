//! Shared application state for the roster API server.

use std::path::{Path, PathBuf};

use roster_core::ActivityRegistry;

/// The front-end bundled with this crate.
const BUNDLED_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. The registry does its own locking, so handlers only ever
/// need `&AppState`.
#[derive(Debug)]
pub struct AppState {
    /// The activity registry all handlers read and mutate.
    pub registry: ActivityRegistry,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create application state around `registry`, serving the bundled
    /// front-end.
    pub fn new(registry: ActivityRegistry) -> Self {
        Self {
            registry,
            static_dir: PathBuf::from(BUNDLED_STATIC_DIR),
        }
    }

    /// Replace the directory served under `/static`.
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.static_dir = dir.as_ref().to_path_buf();
        self
    }
}
