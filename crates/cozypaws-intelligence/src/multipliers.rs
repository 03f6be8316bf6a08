// ABOUTME: Multiplier composition from size, lifestyle, climate, and health flags
// ABOUTME: Health factors compound multiplicatively when several conditions apply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use cozypaws_core::models::{Climate, DogProfile, HealthFlags, Lifestyle, WeightClass};
use serde::{Deserialize, Serialize};

use crate::config::MultiplierConfig;

/// Individual factors and their product
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiplierBreakdown {
    /// Body size factor
    pub size: f64,
    /// Lifestyle factor
    pub lifestyle: f64,
    /// Climate factor
    pub climate: f64,
    /// Product of every active health factor, 1.0 when none
    pub health: f64,
    /// `size * lifestyle * climate * health`
    pub combined: f64,
}

/// Size factor
#[must_use]
pub const fn size_multiplier(weight_class: WeightClass, config: &MultiplierConfig) -> f64 {
    let size = &config.size;
    match weight_class {
        WeightClass::Toy => size.toy,
        WeightClass::Small => size.small,
        WeightClass::Medium => size.medium,
        WeightClass::Large => size.large,
        WeightClass::Giant => size.giant,
    }
}

/// Lifestyle factor
#[must_use]
pub const fn lifestyle_multiplier(lifestyle: Lifestyle, config: &MultiplierConfig) -> f64 {
    let factors = &config.lifestyle;
    match lifestyle {
        Lifestyle::Home => factors.home,
        Lifestyle::Yard => factors.yard,
        Lifestyle::Working => factors.working,
        Lifestyle::Street => factors.street,
    }
}

/// Climate factor
#[must_use]
pub const fn climate_multiplier(climate: Climate, config: &MultiplierConfig) -> f64 {
    let factors = &config.climate;
    match climate {
        Climate::Temperate => factors.temperate,
        Climate::Hot => factors.hot,
        Climate::Altitude => factors.altitude,
        Climate::Cold => factors.cold,
    }
}

/// Compounded health factor
#[must_use]
pub fn health_multiplier(health: &HealthFlags, config: &MultiplierConfig) -> f64 {
    let factors = &config.health;
    [
        (health.brachy, factors.brachy),
        (health.joints, factors.joints),
        (health.obese, factors.obese),
        (health.cardio_resp, factors.cardio_resp),
    ]
    .into_iter()
    .filter(|(active, _)| *active)
    .fold(1.0, |acc, (_, factor)| acc * factor)
}

/// All factors for a profile
#[must_use]
pub fn compose(profile: &DogProfile, config: &MultiplierConfig) -> MultiplierBreakdown {
    let size = size_multiplier(profile.weight_class, config);
    let lifestyle = lifestyle_multiplier(profile.lifestyle, config);
    let climate = climate_multiplier(profile.climate, config);
    let health = health_multiplier(&profile.health, config);
    MultiplierBreakdown {
        size,
        lifestyle,
        climate,
        health,
        combined: size * lifestyle * climate * health,
    }
}
