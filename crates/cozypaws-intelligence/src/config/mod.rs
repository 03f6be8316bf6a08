// ABOUTME: Configuration module for the cozypaws-intelligence crate
// ABOUTME: Re-exports exercise configuration and note catalogue types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

/// Exercise engine configuration (base ranges, multipliers, bounds, walks, notes)
pub mod exercise;

pub use exercise::{
    BaseRangeConfig, ClimateMultipliers, ConfigError, EnrichmentConfig, ExerciseConfig,
    HealthMultipliers, LifestyleMultipliers, MultiplierConfig, NoteMessages, RangeBoundsConfig,
    SizeMultipliers, WalkSplitConfig,
};
