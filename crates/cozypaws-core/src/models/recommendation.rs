// ABOUTME: Output record of the recommendation engine and its advisory notes
// ABOUTME: Minute ranges, note severities, and the serialized recommendation shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use serde::{Deserialize, Serialize};

/// Inclusive range of minutes per day
///
/// Serializes as a two-element array `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct MinuteRange {
    /// Lower bound (minutes/day)
    pub min: u32,
    /// Upper bound (minutes/day)
    pub max: u32,
}

impl MinuteRange {
    /// Create a range from its bounds
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Exact midpoint, before any rounding
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }

    /// Distance between the bounds
    #[must_use]
    pub const fn spread(&self) -> u32 {
        self.max.saturating_sub(self.min)
    }
}

impl From<[u32; 2]> for MinuteRange {
    fn from([min, max]: [u32; 2]) -> Self {
        Self { min, max }
    }
}

impl From<MinuteRange> for [u32; 2] {
    fn from(range: MinuteRange) -> Self {
        [range.min, range.max]
    }
}

/// Severity tag of an advisory note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSeverity {
    /// Informational
    Ok,
    /// Needs attention
    Warn,
    /// Health risk, follow strictly
    Danger,
}

impl NoteSeverity {
    /// Lowercase tag as shown to users
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warn => "warn",
            Self::Danger => "danger",
        }
    }
}

/// One advisory message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryNote {
    /// Human-readable message
    pub message: String,
    /// Severity tag
    pub severity: NoteSeverity,
}

impl AdvisoryNote {
    /// Create a note
    #[must_use]
    pub fn new(message: impl Into<String>, severity: NoteSeverity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

/// Daily exercise recommendation for one dog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecommendation {
    /// Recommended daily total, the rounded midpoint of the range
    pub minutes_per_day: u32,
    /// Adjusted daily range
    pub recommended_range: MinuteRange,
    /// Number of walks per day
    pub walks_per_day: u32,
    /// Duration of each walk
    pub minutes_per_walk: u32,
    /// Daily mental stimulation allotment, separate from walking
    pub enrichment_minutes: u32,
    /// Ordered advisory notes
    pub notes: Vec<AdvisoryNote>,
}
