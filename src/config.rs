//! Server configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `FEEDBACK_HOST` | `0.0.0.0` |
//! | `FEEDBACK_PORT` | `3001` |
//! | `FEEDBACK_API_PREFIX` | `/api` |
//! | `FEEDBACK_SEED` | `true` |

use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path the feedback routes are mounted under.
    pub api_prefix: String,
    /// Start with the sample records.
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            api_prefix: "/api".to_string(),
            seed: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `load` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        Ok(Self {
            host: try_load(&lookup, "FEEDBACK_HOST", defaults.host)?,
            port: try_load(&lookup, "FEEDBACK_PORT", defaults.port)?,
            api_prefix: normalize_prefix(&try_load(
                &lookup,
                "FEEDBACK_API_PREFIX",
                defaults.api_prefix,
            )?),
            seed: try_load(&lookup, "FEEDBACK_SEED", defaults.seed)?,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");
            ConfigError::Invalid {
                key,
                message: e.to_string(),
            }
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

/// `""` and `"/"` mean the root; anything else gets one leading slash and
/// no trailing one.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
