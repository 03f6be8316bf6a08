// ABOUTME: Exercise engine configuration with environment overrides and validation
// ABOUTME: Orchestrates base range, multiplier, bounds, walk, and enrichment configs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

//! Exercise Configuration Module
//!
//! Typed configuration for every numeric table the engine uses.
//! `ExerciseConfig::default()` reproduces the published rules exactly and is
//! what the default engine uses, so a default recommendation never depends on
//! the process environment. Deployments that want to tune the tables call
//! [`ExerciseConfig::load`] (or [`ExerciseConfig::global`]) to apply
//! `EXERCISE_*` environment overrides.
//!
//! # Module Structure
//!
//! - `base_range` - puppy formula, senior and adult ranges
//! - `multipliers` - size, lifestyle, climate and health factors
//! - `bounds` - absolute bounds and rounding step
//! - `walks` - walk split rules and enrichment minutes
//! - `messages` - advisory note catalogues

pub mod base_range;
pub mod bounds;
pub mod error;
pub mod messages;
pub mod multipliers;
pub mod walks;

pub use base_range::BaseRangeConfig;
pub use bounds::RangeBoundsConfig;
pub use error::ConfigError;
pub use messages::NoteMessages;
pub use multipliers::{
    ClimateMultipliers, HealthMultipliers, LifestyleMultipliers, MultiplierConfig,
    SizeMultipliers,
};
pub use walks::{EnrichmentConfig, WalkSplitConfig};

use cozypaws_core::models::MinuteRange;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static EXERCISE_CONFIG: OnceLock<ExerciseConfig> = OnceLock::new();

/// Main exercise configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseConfig {
    /// Unadjusted ranges by age and energy
    pub base_ranges: BaseRangeConfig,
    /// Scaling factors
    pub multipliers: MultiplierConfig,
    /// Absolute bounds and rounding
    pub bounds: RangeBoundsConfig,
    /// Walk split rules
    pub walks: WalkSplitConfig,
    /// Enrichment minutes
    pub enrichment: EnrichmentConfig,
}

impl ExerciseConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once from the environment; falls back to defaults on any error.
    pub fn global() -> &'static Self {
        EXERCISE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load exercise config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment overrides on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first rule the configuration breaks
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_base_ranges()?;
        self.validate_multipliers()?;
        self.validate_bounds()?;
        self.validate_walks()
    }

    fn validate_base_ranges(&self) -> Result<(), ConfigError> {
        let ranges = &self.base_ranges;
        let fixed = [
            ("senior", ranges.senior),
            ("adult_low", ranges.adult_low),
            ("adult_moderate", ranges.adult_moderate),
            ("adult_high", ranges.adult_high),
        ];
        if let Some((name, range)) = fixed.iter().find(|(_, range)| !is_ordered(*range)) {
            warn!(range = *name, min = range.min, max = range.max, "rejecting base range");
            return Err(ConfigError::InvalidRange(
                "base ranges must have min < max",
            ));
        }
        if ranges.puppy_total_min > ranges.puppy_total_max {
            return Err(ConfigError::InvalidRange(
                "puppy_total_min must be <= puppy_total_max",
            ));
        }
        if ranges.puppy_lower_clamp.min > ranges.puppy_lower_clamp.max
            || ranges.puppy_upper_clamp.min > ranges.puppy_upper_clamp.max
        {
            return Err(ConfigError::InvalidRange(
                "puppy clamps must have min <= max",
            ));
        }
        if ranges.puppy_minutes_per_month == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "puppy_minutes_per_month must be at least 1",
            ));
        }
        Ok(())
    }

    fn validate_multipliers(&self) -> Result<(), ConfigError> {
        if let Some((name, value)) = self
            .multipliers
            .named_factors()
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value <= 0.0)
        {
            warn!(factor = name, value, "rejecting non-positive multiplier");
            return Err(ConfigError::ValueOutOfRange(
                "multipliers must be finite and > 0",
            ));
        }
        Ok(())
    }

    fn validate_bounds(&self) -> Result<(), ConfigError> {
        let bounds = &self.bounds;
        if bounds.rounding_step == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "rounding_step must be at least 1",
            ));
        }
        if bounds.min_spread == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_spread must be at least 1",
            ));
        }
        if bounds.min_floor > bounds.min_ceiling {
            return Err(ConfigError::InvalidRange(
                "min_floor must be <= min_ceiling",
            ));
        }
        if bounds.max_floor > bounds.max_ceiling {
            return Err(ConfigError::InvalidRange(
                "max_floor must be <= max_ceiling",
            ));
        }
        if bounds.min_floor >= bounds.max_floor {
            return Err(ConfigError::InvalidRange("min_floor must be < max_floor"));
        }
        if bounds.min_ceiling + bounds.min_spread > bounds.max_ceiling {
            return Err(ConfigError::InvalidRange(
                "min_ceiling + min_spread must be <= max_ceiling",
            ));
        }
        Ok(())
    }

    fn validate_walks(&self) -> Result<(), ConfigError> {
        let walks = &self.walks;
        if walks.walks_at_or_below_threshold == 0
            || walks.walks_above_threshold == 0
            || walks.puppy_sessions_divisor == 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "walk counts and the puppy divisor must be at least 1",
            ));
        }
        if walks.puppy_walk_min_minutes == 0 || walks.joints_walk_min_minutes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "minimum walk durations must be at least 1 minute",
            ));
        }
        if walks.puppy_walk_min_minutes > walks.puppy_walk_max_minutes
            || walks.joints_walk_min_minutes > walks.joints_walk_max_minutes
        {
            return Err(ConfigError::InvalidRange(
                "walk duration clamps must have min <= max",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    // Long function: one line per tunable value
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Size multipliers
        let size = &mut self.multipliers.size;
        Self::apply_env_var("EXERCISE_SIZE_TOY_MULTIPLIER", &mut size.toy)?;
        Self::apply_env_var("EXERCISE_SIZE_SMALL_MULTIPLIER", &mut size.small)?;
        Self::apply_env_var("EXERCISE_SIZE_MEDIUM_MULTIPLIER", &mut size.medium)?;
        Self::apply_env_var("EXERCISE_SIZE_LARGE_MULTIPLIER", &mut size.large)?;
        Self::apply_env_var("EXERCISE_SIZE_GIANT_MULTIPLIER", &mut size.giant)?;

        // Lifestyle multipliers
        let lifestyle = &mut self.multipliers.lifestyle;
        Self::apply_env_var("EXERCISE_LIFESTYLE_HOME_MULTIPLIER", &mut lifestyle.home)?;
        Self::apply_env_var("EXERCISE_LIFESTYLE_YARD_MULTIPLIER", &mut lifestyle.yard)?;
        Self::apply_env_var(
            "EXERCISE_LIFESTYLE_WORKING_MULTIPLIER",
            &mut lifestyle.working,
        )?;
        Self::apply_env_var("EXERCISE_LIFESTYLE_STREET_MULTIPLIER", &mut lifestyle.street)?;

        // Climate multipliers
        let climate = &mut self.multipliers.climate;
        Self::apply_env_var(
            "EXERCISE_CLIMATE_TEMPERATE_MULTIPLIER",
            &mut climate.temperate,
        )?;
        Self::apply_env_var("EXERCISE_CLIMATE_HOT_MULTIPLIER", &mut climate.hot)?;
        Self::apply_env_var("EXERCISE_CLIMATE_ALTITUDE_MULTIPLIER", &mut climate.altitude)?;
        Self::apply_env_var("EXERCISE_CLIMATE_COLD_MULTIPLIER", &mut climate.cold)?;

        // Health multipliers
        let health = &mut self.multipliers.health;
        Self::apply_env_var("EXERCISE_HEALTH_BRACHY_MULTIPLIER", &mut health.brachy)?;
        Self::apply_env_var("EXERCISE_HEALTH_JOINTS_MULTIPLIER", &mut health.joints)?;
        Self::apply_env_var("EXERCISE_HEALTH_OBESE_MULTIPLIER", &mut health.obese)?;
        Self::apply_env_var(
            "EXERCISE_HEALTH_CARDIO_RESP_MULTIPLIER",
            &mut health.cardio_resp,
        )?;

        // Absolute bounds
        let bounds = &mut self.bounds;
        Self::apply_env_var("EXERCISE_BOUNDS_MIN_FLOOR", &mut bounds.min_floor)?;
        Self::apply_env_var("EXERCISE_BOUNDS_MIN_CEILING", &mut bounds.min_ceiling)?;
        Self::apply_env_var("EXERCISE_BOUNDS_MAX_FLOOR", &mut bounds.max_floor)?;
        Self::apply_env_var("EXERCISE_BOUNDS_MAX_CEILING", &mut bounds.max_ceiling)?;
        Self::apply_env_var("EXERCISE_BOUNDS_MIN_SPREAD", &mut bounds.min_spread)?;
        Self::apply_env_var("EXERCISE_ROUNDING_STEP", &mut bounds.rounding_step)?;

        // Walk split
        let walks = &mut self.walks;
        Self::apply_env_var(
            "EXERCISE_WALK_SPLIT_THRESHOLD",
            &mut walks.split_threshold_minutes,
        )?;
        Self::apply_env_var(
            "EXERCISE_WALK_PUPPY_MAX_MINUTES",
            &mut walks.puppy_walk_max_minutes,
        )?;
        Self::apply_env_var(
            "EXERCISE_WALK_JOINTS_MAX_MINUTES",
            &mut walks.joints_walk_max_minutes,
        )?;
        Self::apply_env_var(
            "EXERCISE_WALK_BRACHY_MAX_MINUTES",
            &mut walks.brachy_walk_max_minutes,
        )?;

        Ok(self)
    }
}

const fn is_ordered(range: MinuteRange) -> bool {
    range.min < range.max
}
