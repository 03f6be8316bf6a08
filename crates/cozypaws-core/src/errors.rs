// ABOUTME: Unified error type and error codes shared across the CozyPaws workspace
// ABOUTME: Provides AppError with stable codes, convenience constructors, and conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

//! # Unified Error Handling System
//!
//! The recommendation engine itself is total and never returns an error. Errors
//! only surface around it: strict parsing of user-supplied categories, preset
//! lookups, configuration loading, and report serialization.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// A value could not be interpreted
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A numeric value is outside its accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// A named preset or resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Configuration could not be loaded or failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Process exit code used by the command-line front end
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput | Self::ValueOutOfRange | Self::ResourceNotFound => 2,
            Self::ConfigInvalid => 3,
            Self::InternalError | Self::SerializationError => 1,
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its accepted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_description_and_message() {
        let error = AppError::invalid_input("unknown energy level 'hyper'");
        assert_eq!(
            error.to_string(),
            "The provided input is invalid: unknown energy level 'hyper'"
        );
    }

    #[test]
    fn test_not_found_formats_resource() {
        let error = AppError::not_found("Breed preset 'wolf'");
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.message, "Breed preset 'wolf' not found");
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ConfigInvalid).unwrap();
        assert_eq!(json, "\"CONFIG_INVALID\"");
    }

    #[test]
    fn test_serde_json_error_conversion_keeps_source() {
        let parse_error = serde_json::from_str::<u32>("not a number").unwrap_err();
        let error = AppError::from(parse_error);
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(StdError::source(&error).is_some());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ErrorCode::InvalidInput.exit_code(), 2);
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 3);
        assert_eq!(ErrorCode::InternalError.exit_code(), 1);
    }
}
