// ABOUTME: Dog exercise recommendation engine crate
// ABOUTME: Composes base range, multipliers, clamping, walk split, enrichment, and notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

#![deny(unsafe_code)]

//! # CozyPaws Intelligence
//!
//! Deterministic rules engine turning a [`DogProfile`] into an
//! [`ExerciseRecommendation`]. The calculation is a left-to-right pipeline of
//! pure functions:
//!
//! 1. [`base_range`] - age/energy to an unadjusted minutes-per-day range
//! 2. [`multipliers`] - size, lifestyle, climate and health factors
//! 3. [`adjustment`] - scaling, rounding to 5 minutes, absolute bounds
//! 4. [`walk_split`] - daily total to walks per day and minutes per walk
//! 5. [`notes`] - ordered advisory notes
//!
//! plus the independent [`enrichment`] lookup. Numeric tables live in
//! [`config::ExerciseConfig`], whose defaults reproduce the published rules.
//!
//! [`DogProfile`]: cozypaws_core::models::DogProfile
//! [`ExerciseRecommendation`]: cozypaws_core::models::ExerciseRecommendation

/// Range adjustment and clamping
pub mod adjustment;
/// Base range lookup
pub mod base_range;
/// Typed engine configuration with environment overrides
pub mod config;
/// Mental stimulation allotment
pub mod enrichment;
/// Multiplier composition
pub mod multipliers;
/// Advisory note assembly
pub mod notes;
/// Composition of all steps
pub mod recommendation_engine;
/// Round-to-step helper shared by the steps
pub mod rounding;
/// Walk split heuristic
pub mod walk_split;

pub use config::{ConfigError, ExerciseConfig, NoteMessages};
pub use recommendation_engine::{
    compute_recommendation, RecommendationBreakdown, RecommendationEngine,
};
