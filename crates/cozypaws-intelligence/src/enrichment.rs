// ABOUTME: Daily mental enrichment minutes by age stage and energy
// ABOUTME: Independent of size, lifestyle, climate, and health
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use cozypaws_core::models::{AgeStage, EnergyLevel};

use crate::config::EnrichmentConfig;

/// Enrichment minutes per day
#[must_use]
pub const fn enrichment_minutes(
    age_stage: AgeStage,
    energy: EnergyLevel,
    config: &EnrichmentConfig,
) -> u32 {
    match (age_stage, energy) {
        (AgeStage::Puppy, _) => config.puppy,
        (AgeStage::Senior, _) => config.senior,
        (AgeStage::Adult, EnergyLevel::High) => config.adult_high,
        (AgeStage::Adult, EnergyLevel::Low) => config.adult_low,
        (AgeStage::Adult, EnergyLevel::Moderate) => config.adult_moderate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrichment_table() {
        let config = EnrichmentConfig::default();
        assert_eq!(enrichment_minutes(AgeStage::Puppy, EnergyLevel::High, &config), 15);
        assert_eq!(enrichment_minutes(AgeStage::Senior, EnergyLevel::High, &config), 10);
        assert_eq!(enrichment_minutes(AgeStage::Adult, EnergyLevel::High, &config), 20);
        assert_eq!(enrichment_minutes(AgeStage::Adult, EnergyLevel::Moderate, &config), 15);
        assert_eq!(enrichment_minutes(AgeStage::Adult, EnergyLevel::Low, &config), 10);
    }
}
