//! CLI configuration: flags layered over environment variables.

use std::env;
use std::str::FromStr;

use clap::ValueEnum;
use scorekeeper::error::AppError;

pub const LOG_ENV: &str = "SCOREKEEPER_LOG";
pub const LOG_FORMAT_ENV: &str = "SCOREKEEPER_LOG_FORMAT";
const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Single-line human readable events
    Compact,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            other => Err(AppError::config(format!(
                "{LOG_FORMAT_ENV} must be 'json' or 'compact', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Build from the process environment.
    pub fn from_env(verbose: bool, format_flag: Option<LogFormat>) -> Result<Self, AppError> {
        Self::from_lookup(verbose, format_flag, |key| env::var(key).ok())
    }

    /// Build from any key lookup; flags win over the environment.
    pub fn from_lookup<F>(
        verbose: bool,
        format_flag: Option<LogFormat>,
        lookup: F,
    ) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = if verbose {
            "debug".to_string()
        } else {
            lookup(LOG_ENV)
                .or_else(|| lookup("RUST_LOG"))
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FILTER.to_string())
        };

        let log_format = match format_flag {
            Some(f) => f,
            None => lookup(LOG_FORMAT_ENV)
                .map(|v| v.parse())
                .transpose()?
                .unwrap_or(LogFormat::Compact),
        };

        Ok(Self {
            log_filter,
            log_format,
        })
    }
}
