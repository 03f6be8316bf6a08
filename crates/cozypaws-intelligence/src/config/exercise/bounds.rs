// ABOUTME: Absolute bounds and rounding step for the adjusted daily range
// ABOUTME: Guarantees a non-degenerate range under any multiplier compounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use cozypaws_core::constants::bounds;
use serde::{Deserialize, Serialize};

/// Clamping rules applied after scaling the base range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeBoundsConfig {
    /// Lowest lower bound: 20
    pub min_floor: u32,
    /// Highest lower bound: 180
    pub min_ceiling: u32,
    /// Lowest upper bound: 30
    pub max_floor: u32,
    /// Highest upper bound: 240
    pub max_ceiling: u32,
    /// Upper bound is forced to at least lower bound + spread: 5
    pub min_spread: u32,
    /// Rounding granularity in minutes: 5
    pub rounding_step: u32,
}

impl Default for RangeBoundsConfig {
    fn default() -> Self {
        Self {
            min_floor: bounds::MIN_ADJUSTED_FLOOR,
            min_ceiling: bounds::MIN_ADJUSTED_CEILING,
            max_floor: bounds::MAX_ADJUSTED_FLOOR,
            max_ceiling: bounds::MAX_ADJUSTED_CEILING,
            min_spread: bounds::MIN_RANGE_SPREAD,
            rounding_step: bounds::ROUNDING_STEP,
        }
    }
}
