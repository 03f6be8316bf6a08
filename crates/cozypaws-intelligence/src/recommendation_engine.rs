// ABOUTME: Recommendation engine composing every calculation step for one dog profile
// ABOUTME: Pure and deterministic; holds the numeric config and the note catalogue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

//! Exercise recommendation engine

use cozypaws_core::models::{DogProfile, ExerciseRecommendation, Locale, MinuteRange};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adjustment::{adjust_range, daily_total};
use crate::base_range::base_range;
use crate::config::{ExerciseConfig, NoteMessages};
use crate::enrichment::enrichment_minutes;
use crate::multipliers::{compose, MultiplierBreakdown};
use crate::notes::assemble_notes;
use crate::walk_split::split_walks;

/// Intermediate values of one calculation, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationBreakdown {
    /// Range before multipliers
    pub base_range: MinuteRange,
    /// Individual and combined multipliers
    pub multipliers: MultiplierBreakdown,
    /// Range after scaling, rounding, and clamping
    pub adjusted_range: MinuteRange,
}

/// Rules engine turning a [`DogProfile`] into an [`ExerciseRecommendation`]
///
/// The default engine uses the built-in tables and English notes and never
/// reads the environment.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: ExerciseConfig,
    messages: NoteMessages,
}

impl RecommendationEngine {
    /// Engine with default tables and English notes
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with default tables and notes in `locale`
    #[must_use]
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            config: ExerciseConfig::default(),
            messages: NoteMessages::for_locale(locale),
        }
    }

    /// Engine with custom tables and notes
    #[must_use]
    pub const fn with_config(config: ExerciseConfig, messages: NoteMessages) -> Self {
        Self { config, messages }
    }

    /// Engine with the process-wide configuration (environment overrides applied)
    #[must_use]
    pub fn from_global(locale: Locale) -> Self {
        Self::with_config(
            ExerciseConfig::global().clone(),
            NoteMessages::for_locale(locale),
        )
    }

    /// Numeric tables in use
    #[must_use]
    pub const fn config(&self) -> &ExerciseConfig {
        &self.config
    }

    /// Note catalogue in use
    #[must_use]
    pub const fn messages(&self) -> &NoteMessages {
        &self.messages
    }

    /// Base, multiplier, and adjusted range for a profile
    #[must_use]
    pub fn breakdown(&self, profile: &DogProfile) -> RecommendationBreakdown {
        let base = base_range(profile, &self.config.base_ranges);
        let multipliers = compose(profile, &self.config.multipliers);
        let adjusted_range = adjust_range(base, multipliers.combined, &self.config.bounds);
        RecommendationBreakdown {
            base_range: base,
            multipliers,
            adjusted_range,
        }
    }

    /// Compute the recommendation for a profile
    #[must_use]
    pub fn recommend(&self, profile: &DogProfile) -> ExerciseRecommendation {
        let breakdown = self.breakdown(profile);
        let range = breakdown.adjusted_range;
        let minutes_per_day = daily_total(range, &self.config.bounds);
        let walks = split_walks(
            minutes_per_day,
            profile.age_stage,
            &profile.health,
            &self.config.walks,
        );
        let enrichment =
            enrichment_minutes(profile.age_stage, profile.energy, &self.config.enrichment);
        let notes = assemble_notes(profile, range, &self.messages);

        debug!(
            age_stage = %profile.age_stage,
            weight_class = %profile.weight_class,
            base_min = breakdown.base_range.min,
            base_max = breakdown.base_range.max,
            multiplier = breakdown.multipliers.combined,
            range_min = range.min,
            range_max = range.max,
            minutes_per_day,
            walks_per_day = walks.walks_per_day,
            notes = notes.len(),
            "computed exercise recommendation"
        );

        ExerciseRecommendation {
            minutes_per_day,
            recommended_range: range,
            walks_per_day: walks.walks_per_day,
            minutes_per_walk: walks.minutes_per_walk,
            enrichment_minutes: enrichment,
            notes,
        }
    }
}

/// Recommendation with default tables and English notes
#[must_use]
pub fn compute_recommendation(profile: &DogProfile) -> ExerciseRecommendation {
    RecommendationEngine::new().recommend(profile)
}
