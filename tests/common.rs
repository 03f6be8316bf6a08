// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging setup and generators over the finite profile domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `cozypaws`

use cozypaws::models::{
    AgeStage, Climate, DogProfile, EnergyLevel, HealthFlags, Lifestyle, WeightClass,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// All 16 combinations of the four health flags
pub fn all_health_flags() -> Vec<HealthFlags> {
    (0_u8..16)
        .map(|bits| HealthFlags {
            brachy: bits & 1 != 0,
            joints: bits & 2 != 0,
            obese: bits & 4 != 0,
            cardio_resp: bits & 8 != 0,
        })
        .collect()
}

/// Every (age stage, puppy months, energy) combination that yields a distinct base range
fn all_age_inputs() -> Vec<DogProfile> {
    let puppies = (1..=18).map(|months| DogProfile::puppy(months, WeightClass::Medium));
    let adults = EnergyLevel::ALL
        .iter()
        .map(|energy| DogProfile::adult(*energy, WeightClass::Medium));
    let seniors = EnergyLevel::ALL
        .iter()
        .map(|energy| DogProfile::senior(WeightClass::Medium).with_energy(*energy));
    puppies.chain(adults).chain(seniors).collect()
}

/// Every profile in the finite input domain
///
/// 24 age inputs x 5 sizes x 4 lifestyles x 4 climates x 16 health subsets.
pub fn all_profiles() -> Vec<DogProfile> {
    let flags = all_health_flags();
    let mut profiles = Vec::new();
    for base in all_age_inputs() {
        for weight in WeightClass::ALL {
            for lifestyle in Lifestyle::ALL {
                for climate in Climate::ALL {
                    for health in &flags {
                        let mut profile = base
                            .clone()
                            .with_lifestyle(*lifestyle)
                            .with_climate(*climate)
                            .with_health(*health);
                        profile.weight_class = *weight;
                        profiles.push(profile);
                    }
                }
            }
        }
    }
    profiles
}

/// Whether the profile is a puppy
pub fn is_puppy(profile: &DogProfile) -> bool {
    profile.age_stage == AgeStage::Puppy
}

/// Round to the nearest multiple of 5, ties up
pub fn round5(value: f64) -> u32 {
    ((value / 5.0).round() * 5.0) as u32
}
