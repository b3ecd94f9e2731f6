//! Logging configuration.

use crate::config::LoggingSettings;
use crate::{Error, Result};
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "VCSLINKS_LOG";

/// Fallback environment variable for the log filter directive.
pub const RUST_LOG_ENV: &str = "RUST_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(Error::InvalidInput(format!(
                "Invalid log format: {s}. Expected: pretty or json"
            ))),
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Append-mode log file; stderr when `None`.
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            file: None,
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Builds logging config from file settings and the environment.
    ///
    /// The filter comes from `VCSLINKS_LOG`, then `RUST_LOG`, then `verbose`
    /// (`debug`), then the configured filter, then `warn`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured format is not recognized.
    pub fn from_settings(settings: &LoggingSettings, verbose: bool) -> Result<Self> {
        let env_filter = std::env::var(LOG_ENV)
            .ok()
            .or_else(|| std::env::var(RUST_LOG_ENV).ok());
        Self::resolve(settings, env_filter, verbose)
    }

    fn resolve(
        settings: &LoggingSettings,
        env_filter: Option<String>,
        verbose: bool,
    ) -> Result<Self> {
        let format = settings
            .format
            .as_deref()
            .map(LogFormat::from_str)
            .transpose()?
            .unwrap_or_default();

        let filter = env_filter
            .filter(|value| !value.trim().is_empty())
            .or_else(|| verbose.then(|| VERBOSE_FILTER.to_string()))
            .or_else(|| settings.filter.clone())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        Ok(Self {
            format,
            file: settings.file.clone(),
            filter,
        })
    }
}
