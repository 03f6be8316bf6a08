// ABOUTME: Re-exports the unified error type for the application crate
// ABOUTME: Keeps `cozypaws::errors::*` paths stable for binaries and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

//! Unified error handling, defined in `cozypaws-core`

pub use cozypaws_core::errors::{AppError, AppResult, ErrorCode};
pub use cozypaws_intelligence::ConfigError;
