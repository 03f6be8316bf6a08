// ABOUTME: Environment configuration for the presentation layer
// ABOUTME: Reads COZYPAWS_LOCALE, COZYPAWS_OUTPUT, and the logging variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

//! Environment-based application configuration

use cozypaws_core::errors::{AppError, AppResult};
use cozypaws_core::models::Locale;
use std::env;
use std::str::FromStr;
use tracing::debug;

use crate::formatters::OutputFormat;
use crate::logging::LoggingConfig;

/// Locale environment variable (`en|es`)
pub const LOCALE_VAR: &str = "COZYPAWS_LOCALE";
/// Output format environment variable (`text|json`)
pub const OUTPUT_VAR: &str = "COZYPAWS_OUTPUT";

/// Presentation settings resolved from the environment
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Language of notes and summaries
    pub locale: Locale,
    /// Output format of the `recommend` command
    pub output: OutputFormat,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables take their defaults; set but unrecognized values are
    /// rejected so a typo does not silently change the output.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error naming the offending variable
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            locale: env_var_parsed(LOCALE_VAR)?.unwrap_or_default(),
            output: env_var_parsed(OUTPUT_VAR)?.unwrap_or_default(),
            logging: LoggingConfig::from_env(),
        };
        debug!(
            locale = %config.locale,
            output = %config.output,
            "application configuration loaded"
        );
        Ok(config)
    }
}

/// Parse an optional environment variable
fn env_var_parsed<T>(key: &str) -> AppResult<Option<T>>
where
    T: FromStr<Err = AppError>,
{
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value
            .parse()
            .map(Some)
            .map_err(|e: AppError| AppError::config(format!("Invalid {key}: {}", e.message))),
        _ => Ok(None),
    }
}
