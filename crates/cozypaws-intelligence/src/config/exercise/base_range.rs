// ABOUTME: Base range configuration for age and energy driven daily minutes
// ABOUTME: Puppy per-month formula clamps plus fixed senior and adult ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

//! Base Range Configuration
//!
//! Puppies follow the "about five minutes per month of age, twice a day" rule
//! of thumb, expressed as ten minutes per month of age per day. Seniors get a
//! fixed conservative range; adults are keyed by energy level.

use cozypaws_core::models::MinuteRange;
use serde::{Deserialize, Serialize};

/// Unadjusted minutes-per-day ranges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseRangeConfig {
    /// Daily minutes per month of puppy age: 10
    pub puppy_minutes_per_month: u32,
    /// Lower clamp of the puppy daily total: 20
    pub puppy_total_min: u32,
    /// Upper clamp of the puppy daily total: 60
    pub puppy_total_max: u32,
    /// Half width of the puppy range around its total: 10
    pub puppy_half_width: u32,
    /// Clamp of the puppy lower bound: 15-60
    pub puppy_lower_clamp: MinuteRange,
    /// Clamp of the puppy upper bound: 25-80
    pub puppy_upper_clamp: MinuteRange,
    /// Senior range, energy ignored: 30-60
    pub senior: MinuteRange,
    /// Adult, low energy: 30-60
    pub adult_low: MinuteRange,
    /// Adult, moderate energy: 45-75
    pub adult_moderate: MinuteRange,
    /// Adult, high energy: 90-120
    pub adult_high: MinuteRange,
}

impl Default for BaseRangeConfig {
    fn default() -> Self {
        Self {
            puppy_minutes_per_month: 10,
            puppy_total_min: 20,
            puppy_total_max: 60,
            puppy_half_width: 10,
            puppy_lower_clamp: MinuteRange::new(15, 60),
            puppy_upper_clamp: MinuteRange::new(25, 80),
            senior: MinuteRange::new(30, 60),
            adult_low: MinuteRange::new(30, 60),
            adult_moderate: MinuteRange::new(45, 75),
            adult_high: MinuteRange::new(90, 120),
        }
    }
}
