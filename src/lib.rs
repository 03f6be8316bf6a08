// ABOUTME: Main library entry point for the CozyPaws dog exercise planner
// ABOUTME: Re-exports the engine and adds presets, formatters, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

#![deny(unsafe_code)]

//! # CozyPaws
//!
//! Personalized daily exercise recommendations for dogs: minutes per day,
//! a recommended range, a walk plan, enrichment minutes, and ordered
//! advisory notes.
//!
//! ## Architecture
//!
//! - **`cozypaws-core`**: profile and recommendation models, errors, constants
//! - **`cozypaws-intelligence`**: the pure recommendation engine
//! - **this crate**: breed and city presets, report and summary formatters,
//!   environment configuration, logging, and the `cozypaws-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use cozypaws::models::{DogProfile, EnergyLevel, WeightClass};
//! use cozypaws::compute_recommendation;
//!
//! let profile = DogProfile::adult(EnergyLevel::High, WeightClass::Medium);
//! let rec = compute_recommendation(&profile);
//! assert_eq!(rec.minutes_per_day, 105);
//! assert_eq!(rec.walks_per_day, 3);
//! ```

/// Application configuration from the environment
pub mod config;
/// Unified error types
pub mod errors;
/// JSON report and text summary output
pub mod formatters;
/// Structured logging setup
pub mod logging;
/// Breed and city presets
pub mod presets;

/// Domain models from the core crate
pub use cozypaws_core::models;
/// The recommendation engine crate
pub use cozypaws_intelligence as intelligence;
pub use cozypaws_intelligence::{compute_recommendation, RecommendationEngine};
