// ABOUTME: Configuration error types for exercise engine validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and bad values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

//! Configuration error types for exercise engine validation.

use cozypaws_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Bounds that must be ordered are not (e.g. floor above ceiling)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
