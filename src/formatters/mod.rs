// ABOUTME: Output formatting for recommendations: JSON reports and plain-text summaries
// ABOUTME: Provides the OutputFormat selector shared by the CLI and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: four-line summary followed by the advisory notes
//! - **JSON**: the full [`RecommendationReport`] document

use cozypaws_core::errors::AppError;
use std::fmt;
use std::str::FromStr;

/// JSON report export
pub mod report;
/// Plain-text summary
pub mod summary;

pub use report::{RecommendationFigures, RecommendationReport};
pub use summary::{format_notes, format_summary};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable summary (default)
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

impl OutputFormat {
    /// Format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_input(format!(
                "Unknown output format: '{other}'. Valid options: text, json"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
