// ABOUTME: Exhaustive invariant sweep over the finite dog profile domain
// ABOUTME: Bounds, rounding, walk minimums, determinism, and health-flag monotonicity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use cozypaws::models::{DogProfile, HealthFlags};
use cozypaws::RecommendationEngine;

#[test]
fn test_range_bounds_hold_for_every_profile() {
    common::init_test_logging();
    let engine = RecommendationEngine::new();
    for profile in common::all_profiles() {
        let range = engine.recommend(&profile).recommended_range;
        assert!((20..=180).contains(&range.min), "{profile:?} -> {range:?}");
        assert!((30..=240).contains(&range.max), "{profile:?} -> {range:?}");
        assert!(range.max >= range.min + 5, "{profile:?} -> {range:?}");
        assert!(range.min < range.max);
    }
}

#[test]
fn test_daily_total_is_rounded_midpoint() {
    let engine = RecommendationEngine::new();
    for profile in common::all_profiles() {
        let rec = engine.recommend(&profile);
        let range = rec.recommended_range;
        let expected = common::round5(f64::from(range.min + range.max) / 2.0);
        assert_eq!(rec.minutes_per_day, expected, "{profile:?}");
        assert_eq!(rec.minutes_per_day % 5, 0);
        assert_eq!(range.min % 5, 0);
        assert_eq!(range.max % 5, 0);
    }
}

#[test]
fn test_walk_minimums() {
    let engine = RecommendationEngine::new();
    for profile in common::all_profiles() {
        let rec = engine.recommend(&profile);
        let minimum = if common::is_puppy(&profile) || profile.health.joints {
            3
        } else {
            2
        };
        assert!(rec.walks_per_day >= minimum, "{profile:?} -> {rec:?}");
        assert!(rec.minutes_per_walk > 0, "{profile:?} -> {rec:?}");
        if profile.health.brachy || profile.health.joints || common::is_puppy(&profile) {
            assert!(rec.minutes_per_walk <= 20, "{profile:?} -> {rec:?}");
        }
    }
}

#[test]
fn test_every_recommendation_ends_with_closing_notes() {
    let engine = RecommendationEngine::new();
    let messages = engine.messages();
    for profile in common::all_profiles() {
        let rec = engine.recommend(&profile);
        let last = rec.notes.last().unwrap();
        let range_note = &rec.notes[rec.notes.len() - 2];
        assert_eq!(last.message, messages.observe_signals);
        assert_eq!(
            range_note.message,
            messages.render_range(rec.recommended_range)
        );
    }
}

#[test]
fn test_recomputation_is_identical() {
    let engine = RecommendationEngine::new();
    for profile in common::all_profiles().into_iter().step_by(7) {
        assert_eq!(engine.recommend(&profile), engine.recommend(&profile));
        assert_eq!(
            engine.recommend(&profile),
            RecommendationEngine::new().recommend(&profile)
        );
    }
}

fn with_flag(health: HealthFlags, index: usize) -> HealthFlags {
    let mut flags = health;
    match index {
        0 => flags.brachy = true,
        1 => flags.joints = true,
        2 => flags.obese = true,
        _ => flags.cardio_resp = true,
    }
    flags
}

#[test]
fn test_adding_a_health_flag_never_widens_the_range() {
    let engine = RecommendationEngine::new();
    for profile in common::all_profiles() {
        let before = engine.recommend(&profile).recommended_range;
        for index in 0..4 {
            let stricter: DogProfile = profile
                .clone()
                .with_health(with_flag(profile.health, index));
            let after = engine.recommend(&stricter).recommended_range;
            assert!(after.min <= before.min, "{stricter:?}");
            assert!(after.max <= before.max, "{stricter:?}");
        }
    }
}
