// ABOUTME: Splits the daily total into walks per day and minutes per walk
// ABOUTME: Puppy sessions, threshold-based adult split, joint and brachycephalic caps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

//! Walk split heuristic
//!
//! Puppies always get the session split and nothing else. Adults and
//! seniors get the threshold split, then the joints override (more, shorter
//! walks), then the brachycephalic cap on walk length. The plan is guidance
//! and `walks * minutes` need not equal the daily total.

use cozypaws_core::models::{AgeStage, HealthFlags};
use serde::{Deserialize, Serialize};

use crate::config::WalkSplitConfig;
use crate::rounding::{div_round, round_to_step};

/// Step every per-walk duration snaps to
const WALK_ROUNDING_STEP: u32 = 5;

/// Walks per day and duration of each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkPlan {
    /// Number of walks
    pub walks_per_day: u32,
    /// Minutes per walk
    pub minutes_per_walk: u32,
}

fn per_walk(total: u32, walks: u32) -> u32 {
    round_to_step(f64::from(total) / f64::from(walks.max(1)), WALK_ROUNDING_STEP)
}

/// Split `total` daily minutes into walks
#[must_use]
pub fn split_walks(
    total: u32,
    age_stage: AgeStage,
    health: &HealthFlags,
    config: &WalkSplitConfig,
) -> WalkPlan {
    if age_stage == AgeStage::Puppy {
        let minutes = per_walk(total, config.puppy_sessions_divisor)
            .clamp(config.puppy_walk_min_minutes, config.puppy_walk_max_minutes);
        return WalkPlan {
            walks_per_day: div_round(total, minutes).max(config.puppy_min_walks),
            minutes_per_walk: minutes,
        };
    }

    let mut walks = if total > config.split_threshold_minutes {
        config.walks_above_threshold
    } else {
        config.walks_at_or_below_threshold
    };
    let mut minutes = per_walk(total, walks);

    if health.joints {
        walks = walks.max(config.joints_min_walks);
        minutes = per_walk(total, walks)
            .clamp(config.joints_walk_min_minutes, config.joints_walk_max_minutes);
    }

    if health.brachy {
        minutes = minutes.min(config.brachy_walk_max_minutes);
    }

    WalkPlan {
        walks_per_day: walks,
        minutes_per_walk: minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(total: u32, stage: AgeStage, health: HealthFlags) -> (u32, u32) {
        let plan = split_walks(total, stage, &health, &WalkSplitConfig::default());
        (plan.walks_per_day, plan.minutes_per_walk)
    }

    #[test]
    fn test_adult_at_threshold_gets_two_walks() {
        assert_eq!(plan(80, AgeStage::Adult, HealthFlags::NONE), (2, 40));
        assert_eq!(plan(60, AgeStage::Senior, HealthFlags::NONE), (2, 30));
    }

    #[test]
    fn test_adult_above_threshold_gets_three_walks() {
        assert_eq!(plan(105, AgeStage::Adult, HealthFlags::NONE), (3, 35));
        assert_eq!(plan(85, AgeStage::Adult, HealthFlags::NONE), (3, 30));
    }

    #[test]
    fn test_puppy_sessions() {
        assert_eq!(plan(60, AgeStage::Puppy, HealthFlags::NONE), (4, 15));
        assert_eq!(plan(25, AgeStage::Puppy, HealthFlags::NONE), (3, 8));
        assert_eq!(plan(80, AgeStage::Puppy, HealthFlags::NONE), (4, 20));
    }

    #[test]
    fn test_joints_forces_shorter_walks() {
        let joints = HealthFlags {
            joints: true,
            ..HealthFlags::NONE
        };
        assert_eq!(plan(105, AgeStage::Adult, joints), (3, 20));
        assert_eq!(plan(25, AgeStage::Senior, joints), (3, 10));
        assert_eq!(plan(45, AgeStage::Adult, joints), (3, 15));
    }

    #[test]
    fn test_brachy_caps_walk_length() {
        let brachy = HealthFlags {
            brachy: true,
            ..HealthFlags::NONE
        };
        assert_eq!(plan(105, AgeStage::Adult, brachy), (3, 20));
        assert_eq!(plan(30, AgeStage::Adult, brachy), (2, 15));
    }

    #[test]
    fn test_health_overrides_skip_puppies() {
        let joints = HealthFlags {
            joints: true,
            ..HealthFlags::NONE
        };
        let all = HealthFlags {
            brachy: true,
            joints: true,
            obese: true,
            cardio_resp: true,
        };
        assert_eq!(plan(25, AgeStage::Puppy, joints), (3, 8));
        assert_eq!(plan(25, AgeStage::Puppy, all), (3, 8));
        assert_eq!(plan(60, AgeStage::Puppy, joints), (4, 15));
    }
}
