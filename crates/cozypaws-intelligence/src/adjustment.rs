// ABOUTME: Scales the base range by the combined multiplier and applies absolute bounds
// ABOUTME: Rounds to the step, clamps both ends, and derives the daily total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use cozypaws_core::models::MinuteRange;

use crate::config::RangeBoundsConfig;
use crate::rounding::round_to_step;

/// Apply `multiplier` to `base` and clamp to the absolute bounds
///
/// The upper bound is computed after the lower one and is never allowed to be
/// closer than `min_spread` to it, before its own clamp.
#[must_use]
pub fn adjust_range(base: MinuteRange, multiplier: f64, bounds: &RangeBoundsConfig) -> MinuteRange {
    let step = bounds.rounding_step;
    let min = round_to_step(f64::from(base.min) * multiplier, step)
        .clamp(bounds.min_floor, bounds.min_ceiling);
    let max = round_to_step(f64::from(base.max) * multiplier, step)
        .max(min.saturating_add(bounds.min_spread))
        .clamp(bounds.max_floor, bounds.max_ceiling);
    MinuteRange::new(min, max)
}

/// Recommended daily total: the midpoint of the range rounded to the step
#[must_use]
pub fn daily_total(range: MinuteRange, bounds: &RangeBoundsConfig) -> u32 {
    round_to_step(range.midpoint(), bounds.rounding_step)
}
