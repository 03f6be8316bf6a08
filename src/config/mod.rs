// ABOUTME: Configuration module for application-level settings
// ABOUTME: Environment-driven locale, output format, and logging selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

//! Configuration module for the CozyPaws application layer
//!
//! Engine tables live in `cozypaws_intelligence::config`; this module only
//! covers how results are presented.

/// Environment-based application configuration
pub mod environment;

pub use environment::AppConfig;
pub use cozypaws_intelligence::config::ExerciseConfig;
