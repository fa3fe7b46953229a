//! HTTP API server for the activity roster service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **REST endpoints** for listing activities, signing up a participant,
//!   and unregistering a participant
//! - **Health check** (`GET /health`)
//! - **Web front-end** served from `/static`, with `GET /` redirecting to
//!   the index page
//!
//! # Architecture
//!
//! Handlers share one [`AppState`] holding the
//! [`ActivityRegistry`](roster_core::ActivityRegistry). The registry is
//! constructed by the caller and injected through [`build_router`], so
//! tests can drive a fresh registry per case with `tower::ServiceExt`
//! and never bind a socket.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
