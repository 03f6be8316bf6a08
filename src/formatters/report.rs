// ABOUTME: Serializable recommendation report combining inputs, figures, notes, and a timestamp
// ABOUTME: Mirrors the exported document shape and writes it to a timestamped file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use chrono::{DateTime, Utc};
use cozypaws_core::errors::{AppError, AppResult};
use cozypaws_core::models::{AdvisoryNote, DogProfile, ExerciseRecommendation, MinuteRange};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Numeric part of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationFigures {
    /// Recommended daily total
    pub minutes_per_day: u32,
    /// Adjusted daily range, serialized as `[min, max]`
    pub recommended_range: MinuteRange,
    /// Walks per day
    pub walks_per_day: u32,
    /// Minutes per walk
    pub minutes_per_walk: u32,
    /// Mental enrichment minutes per day
    pub enrichment_minutes: u32,
}

impl From<&ExerciseRecommendation> for RecommendationFigures {
    fn from(rec: &ExerciseRecommendation) -> Self {
        Self {
            minutes_per_day: rec.minutes_per_day,
            recommended_range: rec.recommended_range,
            walks_per_day: rec.walks_per_day,
            minutes_per_walk: rec.minutes_per_walk,
            enrichment_minutes: rec.enrichment_minutes,
        }
    }
}

/// Exported recommendation document
///
/// The profile fields sit at the top level next to `recommendation`,
/// `notes`, and `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Inputs the recommendation was computed from
    #[serde(flatten)]
    pub profile: DogProfile,
    /// Computed figures
    pub recommendation: RecommendationFigures,
    /// Advisory notes in display order
    pub notes: Vec<AdvisoryNote>,
    /// When the report was produced
    pub timestamp: DateTime<Utc>,
}

impl RecommendationReport {
    /// Report stamped with the current time
    #[must_use]
    pub fn new(profile: DogProfile, recommendation: &ExerciseRecommendation) -> Self {
        Self::new_at(profile, recommendation, Utc::now())
    }

    /// Report stamped with `timestamp`
    #[must_use]
    pub fn new_at(
        profile: DogProfile,
        recommendation: &ExerciseRecommendation,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            profile,
            recommendation: recommendation.into(),
            notes: recommendation.notes.clone(),
            timestamp,
        }
    }

    /// Pretty-printed JSON document
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the report cannot be encoded
    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// File name for this report, keyed by its timestamp in milliseconds
    #[must_use]
    pub fn report_file_name(&self) -> String {
        format!(
            "cozypaws_recommendation_{}.json",
            self.timestamp.timestamp_millis()
        )
    }

    /// Write the JSON document into `dir` and return its path
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails
    pub fn write_to_dir(&self, dir: &Path) -> AppResult<PathBuf> {
        let path = dir.join(self.report_file_name());
        let json = self.to_json_pretty()?;
        fs::write(&path, json).map_err(|e| {
            AppError::internal(format!("Failed to write report to {}", path.display()))
                .with_source(e)
        })?;
        info!(path = %path.display(), "recommendation report saved");
        Ok(path)
    }
}
