// ABOUTME: Walk split and enrichment configuration
// ABOUTME: Session thresholds, per-walk clamps for puppies and health caps, enrichment minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use serde::{Deserialize, Serialize};

/// Rules for splitting the daily total into walks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkSplitConfig {
    /// Daily totals above this get the larger walk count: 80
    pub split_threshold_minutes: u32,
    /// Walks per day at or below the threshold: 2
    pub walks_at_or_below_threshold: u32,
    /// Walks per day above the threshold: 3
    pub walks_above_threshold: u32,
    /// Puppy per-walk duration starts from total / divisor: 4
    pub puppy_sessions_divisor: u32,
    /// Minimum puppy walks per day: 3
    pub puppy_min_walks: u32,
    /// Shortest puppy walk: 8
    pub puppy_walk_min_minutes: u32,
    /// Longest puppy walk: 20
    pub puppy_walk_max_minutes: u32,
    /// Minimum walks per day with sensitive joints: 3
    pub joints_min_walks: u32,
    /// Shortest walk with sensitive joints: 10
    pub joints_walk_min_minutes: u32,
    /// Longest walk with sensitive joints: 20
    pub joints_walk_max_minutes: u32,
    /// Longest walk for brachycephalic dogs: 20
    pub brachy_walk_max_minutes: u32,
}

impl Default for WalkSplitConfig {
    fn default() -> Self {
        Self {
            split_threshold_minutes: 80,
            walks_at_or_below_threshold: 2,
            walks_above_threshold: 3,
            puppy_sessions_divisor: 4,
            puppy_min_walks: 3,
            puppy_walk_min_minutes: 8,
            puppy_walk_max_minutes: 20,
            joints_min_walks: 3,
            joints_walk_min_minutes: 10,
            joints_walk_max_minutes: 20,
            brachy_walk_max_minutes: 20,
        }
    }
}

/// Daily mental stimulation minutes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    /// Puppies: 15
    pub puppy: u32,
    /// Seniors: 10
    pub senior: u32,
    /// Adults, low energy: 10
    pub adult_low: u32,
    /// Adults, moderate energy: 15
    pub adult_moderate: u32,
    /// Adults, high energy: 20
    pub adult_high: u32,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            puppy: 15,
            senior: 10,
            adult_low: 10,
            adult_moderate: 15,
            adult_high: 20,
        }
    }
}
