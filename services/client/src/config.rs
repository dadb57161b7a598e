//! services/client/src/config.rs
//!
//! Defines the client's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

use newshaven_core::catalog::{DEMO_EMAIL, DEMO_PASSWORD};

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub storage_dir: PathBuf,
    pub log_level: Level,
    pub login_latency: Duration,
    pub summary_latency: Duration,
    pub podcast_latency: Duration,
    pub seed_demo_history: bool,
    pub demo_email: String,
    pub demo_password: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // --- Storage and Logging ---
        let storage_dir = lookup("STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./.newshaven"));

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Simulated Latencies ---
        let login_latency = millis(&lookup, "LOGIN_LATENCY_MS", 1000)?;
        let summary_latency = millis(&lookup, "SUMMARY_LATENCY_MS", 2000)?;
        let podcast_latency = millis(&lookup, "PODCAST_LATENCY_MS", 3000)?;

        // --- Demo Data ---
        let seed_demo_history = match lookup("SEED_DEMO_HISTORY") {
            None => true,
            Some(value) => value.parse::<bool>().map_err(|_| {
                ConfigError::InvalidValue(
                    "SEED_DEMO_HISTORY".to_string(),
                    format!("'{}' is not true or false", value),
                )
            })?,
        };
        let demo_email = lookup("DEMO_EMAIL").unwrap_or_else(|| DEMO_EMAIL.to_string());
        let demo_password = lookup("DEMO_PASSWORD").unwrap_or_else(|| DEMO_PASSWORD.to_string());
        if demo_email.is_empty() {
            return Err(ConfigError::MissingVar("DEMO_EMAIL".to_string()));
        }

        Ok(Self {
            storage_dir,
            log_level,
            login_latency,
            summary_latency,
            podcast_latency,
            seed_demo_history,
            demo_email,
            demo_password,
        })
    }
}

fn millis(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u64,
) -> Result<Duration, ConfigError> {
    match lookup(name) {
        None => Ok(Duration::from_millis(default)),
        Some(raw) => raw
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), e.to_string())),
    }
}
