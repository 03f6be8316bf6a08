// ABOUTME: Multiplier configuration for size, lifestyle, climate, and health factors
// ABOUTME: Each factor scales the base range; factors compound multiplicatively
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use serde::{Deserialize, Serialize};

/// All multiplier tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiplierConfig {
    /// Body size factors
    pub size: SizeMultipliers,
    /// Living situation factors
    pub lifestyle: LifestyleMultipliers,
    /// Climate factors
    pub climate: ClimateMultipliers,
    /// Health condition factors (compounding)
    pub health: HealthMultipliers,
}

/// Body size factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeMultipliers {
    /// Toy: 0.90
    pub toy: f64,
    /// Small: 0.95
    pub small: f64,
    /// Medium: 1.00
    pub medium: f64,
    /// Large: 1.10
    pub large: f64,
    /// Giant: 1.20
    pub giant: f64,
}

/// Living situation factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleMultipliers {
    /// Indoor companion: 1.00
    pub home: f64,
    /// Yard or rural: 0.90
    pub yard: f64,
    /// Working or sport: 1.30
    pub working: f64,
    /// Street or community: 1.00
    pub street: f64,
}

/// Climate factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateMultipliers {
    /// Temperate: 1.00
    pub temperate: f64,
    /// Hot: 0.80
    pub hot: f64,
    /// High altitude: 0.90
    pub altitude: f64,
    /// Cold: 0.90
    pub cold: f64,
}

/// Health condition factors, applied once per flag that is set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMultipliers {
    /// Brachycephalic: 0.75
    pub brachy: f64,
    /// Sensitive joints: 0.80
    pub joints: f64,
    /// Overweight: 0.85
    pub obese: f64,
    /// Cardiac or respiratory: 0.70
    pub cardio_resp: f64,
}

impl Default for SizeMultipliers {
    fn default() -> Self {
        Self {
            toy: 0.9,
            small: 0.95,
            medium: 1.0,
            large: 1.1,
            giant: 1.2,
        }
    }
}

impl Default for LifestyleMultipliers {
    fn default() -> Self {
        Self {
            home: 1.0,
            yard: 0.9,
            working: 1.3,
            street: 1.0,
        }
    }
}

impl Default for ClimateMultipliers {
    fn default() -> Self {
        Self {
            temperate: 1.0,
            hot: 0.8,
            altitude: 0.9,
            cold: 0.9,
        }
    }
}

impl Default for HealthMultipliers {
    fn default() -> Self {
        Self {
            brachy: 0.75,
            joints: 0.8,
            obese: 0.85,
            cardio_resp: 0.7,
        }
    }
}

impl MultiplierConfig {
    /// Every factor with a dotted name, for validation and diagnostics
    #[must_use]
    pub fn named_factors(&self) -> [(&'static str, f64); 17] {
        [
            ("size.toy", self.size.toy),
            ("size.small", self.size.small),
            ("size.medium", self.size.medium),
            ("size.large", self.size.large),
            ("size.giant", self.size.giant),
            ("lifestyle.home", self.lifestyle.home),
            ("lifestyle.yard", self.lifestyle.yard),
            ("lifestyle.working", self.lifestyle.working),
            ("lifestyle.street", self.lifestyle.street),
            ("climate.temperate", self.climate.temperate),
            ("climate.hot", self.climate.hot),
            ("climate.altitude", self.climate.altitude),
            ("climate.cold", self.climate.cold),
            ("health.brachy", self.health.brachy),
            ("health.joints", self.health.joints),
            ("health.obese", self.health.obese),
            ("health.cardio_resp", self.health.cardio_resp),
        ]
    }
}
