//! Runtime configuration from the environment (and an optional `.env` file).

use clap::ValueEnum;

use crate::domain::OutputFormat;
use crate::error::AppError;

pub const ENV_LOG: &str = "WORKOUT_LOG";
pub const ENV_FORMAT: &str = "WORKOUT_FORMAT";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `tracing` filter directive, e.g. `warn` or `workout_stats=debug`.
    pub log_filter: String,
    /// Output format used when `--format` is not given.
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if present) and read settings from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(filter) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_FORMAT).filter(|v| !v.trim().is_empty()) {
            config.format = OutputFormat::from_str(raw.trim(), true).map_err(|_| {
                AppError::new(
                    2,
                    format!("Invalid {ENV_FORMAT} '{raw}' (expected 'text' or 'json')."),
                )
            })?;
        }

        Ok(config)
    }
}
