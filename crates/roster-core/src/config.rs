//! Configuration loading and typed config structures for the roster service.
//!
//! The configuration lives in `roster-config.yaml`. This module defines
//! strongly-typed structs that mirror the YAML structure and a loader that
//! reads the file. Every field has a default, so an empty or missing file
//! yields a working configuration with the built-in seed activities.

use std::path::Path;

use serde::Deserialize;

use crate::activity::Activity;
use crate::email::ParticipantEmail;
use crate::error::RosterError;
use crate::seed;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override could not be parsed.
    #[error("invalid environment override {name}: {message}")]
    Env {
        /// The environment variable name.
        name: String,
        /// Why the value was rejected.
        message: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level roster service configuration.
///
/// Mirrors the structure of `roster-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RosterConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Seed activities. When absent the built-in seed set is used.
    #[serde(default)]
    pub activities: Option<Vec<ActivityConfig>>,
}

impl RosterConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for the listener:
    /// - `ROSTER_HOST` overrides `http.host`
    /// - `ROSTER_PORT` overrides `http.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Env`] if an override is malformed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.http.apply_env_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise start from defaults.
    ///
    /// Environment overrides are read from the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_file`].
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(path, |name| std::env::var(name).ok())
    }

    /// Load from `path` if it exists, otherwise start from defaults, and
    /// apply listener overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_file`].
    pub fn load_with_env(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::parse(&std::fs::read_to_string(path)?)?
        } else {
            Self::default()
        };
        config.http.apply_env_overrides(lookup)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. No environment overrides
    /// are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// The seed entries a registry should be built from: the configured
    /// list if present, otherwise [`seed::default_activities`].
    ///
    /// # Errors
    ///
    /// Propagates [`RosterError::InvalidEmail`] from the built-in seed.
    pub fn seed_activities(&self) -> Result<Vec<(String, Activity)>, RosterError> {
        match &self.activities {
            Some(list) => Ok(list.iter().cloned().map(ActivityConfig::into_entry).collect()),
            None => seed::default_activities(),
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the web front-end. When absent the bundled
    /// `static/` directory of the API crate is served.
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl HttpConfig {
    /// Apply `ROSTER_HOST` / `ROSTER_PORT` overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] if `ROSTER_PORT` is not a valid port.
    pub fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("ROSTER_HOST") {
            self.host = val;
        }
        if let Some(val) = lookup("ROSTER_PORT") {
            self.port = val.parse().map_err(|e| ConfigError::Env {
                name: String::from("ROSTER_PORT"),
                message: format!("{val:?}: {e}"),
            })?;
        }
        Ok(())
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (trace, debug, info, warn, error).
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// One seed activity as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActivityConfig {
    /// Unique activity name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// When the activity meets.
    #[serde(default)]
    pub schedule: String,
    /// Maximum number of participants.
    #[serde(default = "default_max_participants")]
    pub max_participants: u32,
    /// Pre-enrolled participants.
    #[serde(default)]
    pub participants: Vec<ParticipantEmail>,
}

impl ActivityConfig {
    /// Split into the `(name, Activity)` pair the registry consumes.
    pub fn into_entry(self) -> (String, Activity) {
        let Self {
            name,
            description,
            schedule,
            max_participants,
            participants,
        } = self;
        (
            name,
            Activity {
                description,
                schedule,
                max_participants,
                participants,
            },
        )
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_max_participants() -> u32 {
    20
}
