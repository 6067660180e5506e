//! Runtime configuration for the portfolio core.
//!
//! # Responsibility
//! - Provide defaults for the live site: 300 ms close delay, seeded grid.
//! - Read overrides from environment variables or a host-supplied JSON
//!   object.
//!
//! # Invariants
//! - Blank environment values fall back to defaults.
//! - Malformed values are rejected, never silently coerced.

use crate::logging::{default_log_level, normalize_level};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub const ENV_LOG_LEVEL: &str = "FOLIO_LOG_LEVEL";
pub const ENV_LIGHTBOX_CLOSE_DELAY_MS: &str = "FOLIO_LIGHTBOX_CLOSE_DELAY_MS";
pub const ENV_SEED_PROJECTS: &str = "FOLIO_SEED_PROJECTS";

const DEFAULT_LIGHTBOX_CLOSE_DELAY_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Delay between closing the lightbox and dropping its selection.
    pub lightbox_close_delay_ms: u64,
    /// Start the session with the built-in projects.
    pub seed_projects: bool,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            lightbox_close_delay_ms: DEFAULT_LIGHTBOX_CLOSE_DELAY_MS,
            seed_projects: true,
        }
    }
}

impl FolioConfig {
    /// Reads overrides from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`, which maps a variable name to its
    /// raw value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let read = |key: &'static str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(value) = read(ENV_LOG_LEVEL) {
            config.log_level = value;
        }
        config.log_level = checked_log_level(&config.log_level)?;
        if let Some(value) = read(ENV_LIGHTBOX_CLOSE_DELAY_MS) {
            config.lightbox_close_delay_ms = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_LIGHTBOX_CLOSE_DELAY_MS,
                value: value.clone(),
            })?;
        }
        if let Some(value) = read(ENV_SEED_PROJECTS) {
            config.seed_projects = parse_flag(&value).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_SEED_PROJECTS,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }

    /// Parses a partial JSON object; missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Json(err.to_string()))?;
        config.log_level = checked_log_level(&config.log_level)?;
        Ok(config)
    }

    pub fn lightbox_close_delay(&self) -> Duration {
        Duration::from_millis(self.lightbox_close_delay_ms)
    }
}

/// Canonical level name, or `InvalidValue` keyed by the env variable.
fn checked_log_level(value: &str) -> Result<String, ConfigError> {
    normalize_level(value)
        .map(str::to_string)
        .map_err(|_| ConfigError::InvalidValue {
            key: ENV_LOG_LEVEL,
            value: value.to_string(),
        })
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
    Json(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value for `{key}`: `{value}`")
            }
            Self::Json(message) => write!(f, "invalid config JSON: {message}"),
        }
    }
}

impl Error for ConfigError {}
