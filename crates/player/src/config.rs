//! Player configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `CHARBLDR_API_URL` - Base URL of the reference API (default: public dnd5eapi)
//! - `CHARBLDR_RETRY_MAX_ATTEMPTS` - Total attempts for rate-limited requests (default: 5)
//! - `CHARBLDR_RETRY_BACKOFF_MS` - Delay between rate-limited attempts (default: 1000)
//! - `CHARBLDR_STORAGE_PATH` - Directory for the local stores (default: platform data dir)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::infrastructure::srd_api::{RetryPolicy, DEFAULT_API_URL};

pub const API_URL_VAR: &str = "CHARBLDR_API_URL";
pub const RETRY_MAX_ATTEMPTS_VAR: &str = "CHARBLDR_RETRY_MAX_ATTEMPTS";
pub const RETRY_BACKOFF_MS_VAR: &str = "CHARBLDR_RETRY_BACKOFF_MS";
pub const STORAGE_PATH_VAR: &str = "CHARBLDR_STORAGE_PATH";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({message})")]
    Invalid {
        key: &'static str,
        value: String,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub api_url: String,
    pub retry: RetryPolicy,
    /// `None` means the platform default location
    pub storage_path: Option<PathBuf>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            retry: RetryPolicy::default(),
            storage_path: None,
        }
    }
}

impl PlayerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Unset or blank keys keep
    /// their defaults; set keys must parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let max_attempts: u32 = parse_or(
            RETRY_MAX_ATTEMPTS_VAR,
            lookup(RETRY_MAX_ATTEMPTS_VAR),
            defaults.retry.max_attempts,
        )?;
        if max_attempts == 0 {
            return Err(ConfigError::Invalid {
                key: RETRY_MAX_ATTEMPTS_VAR,
                value: "0".to_string(),
                message: "at least one attempt is required".to_string(),
            });
        }

        Ok(Self {
            api_url: lookup(API_URL_VAR).unwrap_or(defaults.api_url),
            retry: RetryPolicy {
                max_attempts,
                backoff_ms: parse_or(
                    RETRY_BACKOFF_MS_VAR,
                    lookup(RETRY_BACKOFF_MS_VAR),
                    defaults.retry.backoff_ms,
                )?,
            },
            storage_path: lookup(STORAGE_PATH_VAR).map(PathBuf::from),
        })
    }
}

fn parse_or<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
            value: raw,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<PlayerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlayerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]).expect("config");
        assert_eq!(config, PlayerConfig::default());
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.backoff_ms, 1000);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            (API_URL_VAR, "http://localhost:3000/api"),
            (RETRY_MAX_ATTEMPTS_VAR, "3"),
            (RETRY_BACKOFF_MS_VAR, " 250 "),
            (STORAGE_PATH_VAR, "/tmp/charbldr"),
        ])
        .expect("config");

        assert_eq!(config.api_url, "http://localhost:3000/api");
        assert_eq!(config.retry, RetryPolicy { max_attempts: 3, backoff_ms: 250 });
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/charbldr")));
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = config(&[(API_URL_VAR, "  "), (RETRY_BACKOFF_MS_VAR, "")]).expect("config");
        assert_eq!(config, PlayerConfig::default());
    }

    #[test]
    fn rejects_unparseable_numbers() {
        let err = config(&[(RETRY_BACKOFF_MS_VAR, "soon")]).expect_err("invalid");
        assert!(matches!(err, ConfigError::Invalid { key: RETRY_BACKOFF_MS_VAR, .. }));
    }

    #[test]
    fn rejects_zero_attempts() {
        let err = config(&[(RETRY_MAX_ATTEMPTS_VAR, "0")]).expect_err("invalid");
        assert!(err.to_string().contains(RETRY_MAX_ATTEMPTS_VAR));
    }
}
