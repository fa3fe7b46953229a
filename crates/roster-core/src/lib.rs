//! Core domain for the activity roster service.
//!
//! This crate owns everything that is independent of the HTTP layer:
//!
//! - [`Activity`] records and the validated [`ParticipantEmail`] newtype
//! - the [`ActivityRegistry`], the single mutable store of rosters
//! - the built-in seed activities loaded at startup
//! - YAML configuration ([`RosterConfig`])
//!
//! # Architecture
//!
//! The registry is constructed explicitly and handed to whichever layer
//! serves requests. There is no process-wide global: tests construct a
//! fresh registry each time and never observe each other's signups.
//!
//! All roster mutations run under one registry-wide write lock so the
//! membership check and the insert/remove happen atomically.

pub mod activity;
pub mod config;
pub mod email;
pub mod error;
pub mod registry;
pub mod seed;

// Re-export primary types for convenience.
pub use activity::Activity;
pub use config::{ConfigError, RosterConfig};
pub use email::ParticipantEmail;
pub use error::RosterError;
pub use registry::ActivityRegistry;
