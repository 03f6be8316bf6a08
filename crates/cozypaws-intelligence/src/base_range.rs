// ABOUTME: Base range lookup from age stage, puppy age, and energy level
// ABOUTME: Produces the unadjusted minutes-per-day range before any multiplier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use cozypaws_core::models::{AgeStage, DogProfile, EnergyLevel, MinuteRange};

use crate::config::BaseRangeConfig;

/// Unadjusted daily range for a profile
///
/// Puppies scale with age in months, seniors get a fixed range regardless of
/// energy, and adults are keyed by energy level.
#[must_use]
pub fn base_range(profile: &DogProfile, config: &BaseRangeConfig) -> MinuteRange {
    match profile.age_stage {
        AgeStage::Puppy => puppy_range(profile.effective_puppy_months(), config),
        AgeStage::Senior => config.senior,
        AgeStage::Adult => adult_range(profile.energy, config),
    }
}

/// Range for a puppy of `months` months
#[must_use]
pub fn puppy_range(months: u32, config: &BaseRangeConfig) -> MinuteRange {
    let total = months
        .saturating_mul(config.puppy_minutes_per_month)
        .clamp(config.puppy_total_min, config.puppy_total_max);
    let lower = total
        .saturating_sub(config.puppy_half_width)
        .clamp(config.puppy_lower_clamp.min, config.puppy_lower_clamp.max);
    let upper = total
        .saturating_add(config.puppy_half_width)
        .clamp(config.puppy_upper_clamp.min, config.puppy_upper_clamp.max);
    MinuteRange::new(lower, upper)
}

/// Range for an adult of the given energy
#[must_use]
pub const fn adult_range(energy: EnergyLevel, config: &BaseRangeConfig) -> MinuteRange {
    match energy {
        EnergyLevel::Low => config.adult_low,
        EnergyLevel::Moderate => config.adult_moderate,
        EnergyLevel::High => config.adult_high,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozypaws_core::models::WeightClass;

    #[test]
    fn test_puppy_ranges_across_months() {
        let config = BaseRangeConfig::default();
        assert_eq!(puppy_range(1, &config), MinuteRange::new(15, 30));
        assert_eq!(puppy_range(2, &config), MinuteRange::new(15, 30));
        assert_eq!(puppy_range(3, &config), MinuteRange::new(20, 40));
        assert_eq!(puppy_range(6, &config), MinuteRange::new(50, 70));
        assert_eq!(puppy_range(18, &config), MinuteRange::new(50, 70));
    }

    #[test]
    fn test_puppy_without_months_uses_six() {
        let config = BaseRangeConfig::default();
        let mut profile = DogProfile::puppy(6, WeightClass::Medium);
        profile.puppy_months = None;
        assert_eq!(base_range(&profile, &config), MinuteRange::new(50, 70));
    }

    #[test]
    fn test_senior_ignores_energy() {
        let config = BaseRangeConfig::default();
        let profile = DogProfile::senior(WeightClass::Large).with_energy(EnergyLevel::High);
        assert_eq!(base_range(&profile, &config), MinuteRange::new(30, 60));
    }

    #[test]
    fn test_adult_by_energy() {
        let config = BaseRangeConfig::default();
        let cases = [
            (EnergyLevel::Low, MinuteRange::new(30, 60)),
            (EnergyLevel::Moderate, MinuteRange::new(45, 75)),
            (EnergyLevel::High, MinuteRange::new(90, 120)),
        ];
        for (energy, expected) in cases {
            let profile = DogProfile::adult(energy, WeightClass::Medium);
            assert_eq!(base_range(&profile, &config), expected, "{energy}");
        }
    }
}
