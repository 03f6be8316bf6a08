// ABOUTME: Breed presets mapping a breed key to its energy level and brachycephaly
// ABOUTME: Applying a preset resets health flags and energy before setting the breed's values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use cozypaws_core::errors::{AppError, AppResult};
use cozypaws_core::models::{DogProfile, EnergyLevel, HealthFlags};
use tracing::debug;

/// Typical energy and head shape of a breed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreedPreset {
    /// Lowercase key, e.g. `border_collie`
    pub key: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Energy level the breed usually has
    pub energy: EnergyLevel,
    /// Whether the breed is brachycephalic
    pub brachy: bool,
}

const fn preset(
    key: &'static str,
    name: &'static str,
    energy: EnergyLevel,
    brachy: bool,
) -> BreedPreset {
    BreedPreset {
        key,
        name,
        energy,
        brachy,
    }
}

/// Every known breed preset
pub const BREED_PRESETS: &[BreedPreset] = &[
    // High energy
    preset("husky", "Siberian Husky", EnergyLevel::High, false),
    preset("border_collie", "Border Collie", EnergyLevel::High, false),
    preset("malinois", "Belgian Malinois", EnergyLevel::High, false),
    preset("gspointer", "German Shorthaired Pointer", EnergyLevel::High, false),
    preset("aussie", "Australian Shepherd", EnergyLevel::High, false),
    preset("german_shepherd", "German Shepherd", EnergyLevel::High, false),
    preset("samoyed", "Samoyed", EnergyLevel::High, false),
    preset("akita", "Akita", EnergyLevel::High, false),
    preset("jack_russell", "Jack Russell Terrier", EnergyLevel::High, false),
    preset("boxer", "Boxer", EnergyLevel::High, false),
    // Moderate energy
    preset("labrador", "Labrador Retriever", EnergyLevel::Moderate, false),
    preset("golden", "Golden Retriever", EnergyLevel::Moderate, false),
    preset("beagle", "Beagle", EnergyLevel::Moderate, false),
    preset("cocker", "Cocker Spaniel", EnergyLevel::Moderate, false),
    preset("schnauzer_std", "Standard Schnauzer", EnergyLevel::Moderate, false),
    preset("poodle_std", "Standard Poodle", EnergyLevel::Moderate, false),
    preset("pitbull", "Pit Bull", EnergyLevel::Moderate, false),
    preset("american_bully", "American Bully", EnergyLevel::Moderate, false),
    preset("bernese", "Bernese Mountain Dog", EnergyLevel::Moderate, false),
    preset("pomsky", "Pomsky", EnergyLevel::Moderate, false),
    preset("yorkie", "Yorkshire Terrier", EnergyLevel::Moderate, false),
    // Brachycephalic
    preset("bulldog", "Bulldog", EnergyLevel::Low, true),
    preset("frenchie", "French Bulldog", EnergyLevel::Low, true),
    preset("pug", "Pug", EnergyLevel::Low, true),
    preset("boston", "Boston Terrier", EnergyLevel::Low, true),
    preset("shih_tzu", "Shih Tzu", EnergyLevel::Low, true),
    // Low energy
    preset("chow", "Chow Chow", EnergyLevel::Low, false),
    preset("chihuahua", "Chihuahua", EnergyLevel::Low, false),
    preset("dachshund", "Dachshund", EnergyLevel::Low, false),
    preset("schnauzer_mini", "Miniature Schnauzer", EnergyLevel::Low, false),
    preset("poodle_toy", "Toy Poodle", EnergyLevel::Low, false),
    preset("pomeranian", "Pomeranian", EnergyLevel::Low, false),
];

impl BreedPreset {
    /// Preset for `key`, case-insensitive
    #[must_use]
    pub fn lookup(key: &str) -> Option<&'static Self> {
        let key = key.trim().to_lowercase();
        BREED_PRESETS.iter().find(|preset| preset.key == key)
    }

    /// Preset for `key`, failing on unknown breeds
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no preset has this key
    pub fn find(key: &str) -> AppResult<&'static Self> {
        Self::lookup(key).ok_or_else(|| AppError::not_found(format!("Breed preset '{key}'")))
    }

    /// Set this breed's energy and brachycephaly on a reset profile
    #[must_use]
    pub fn apply(&self, profile: DogProfile) -> DogProfile {
        reset(profile)
            .with_energy(self.energy)
            .with_health(HealthFlags {
                brachy: self.brachy,
                ..HealthFlags::NONE
            })
    }
}

fn reset(profile: DogProfile) -> DogProfile {
    profile
        .with_energy(EnergyLevel::Moderate)
        .with_health(HealthFlags::NONE)
}

/// Apply the preset for `key` to `profile`
///
/// Health flags are cleared and energy set to moderate first, even when the
/// key is unknown. Weight class, lifestyle, climate, and age are untouched.
#[must_use]
pub fn apply_breed(profile: DogProfile, key: &str) -> DogProfile {
    if let Some(preset) = BreedPreset::lookup(key) {
        debug!(breed = preset.key, energy = %preset.energy, brachy = preset.brachy, "applying breed preset");
        preset.apply(profile)
    } else {
        debug!(breed = key, "unknown breed preset, resetting energy and health flags");
        reset(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozypaws_core::models::WeightClass;

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = BREED_PRESETS.iter().map(|preset| preset.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), BREED_PRESETS.len());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let preset = BreedPreset::lookup(" Husky ").unwrap();
        assert_eq!(preset.energy, EnergyLevel::High);
    }

    #[test]
    fn test_find_unknown_is_not_found() {
        let error = BreedPreset::find("dragon").unwrap_err();
        assert_eq!(error.code, cozypaws_core::errors::ErrorCode::ResourceNotFound);
    }

    #[test]
    fn test_brachy_breeds_are_low_energy() {
        assert!(BREED_PRESETS
            .iter()
            .filter(|preset| preset.brachy)
            .all(|preset| preset.energy == EnergyLevel::Low));
    }

    #[test]
    fn test_apply_clears_previous_flags() {
        let profile = DogProfile::adult(EnergyLevel::High, WeightClass::Small).with_health(
            HealthFlags {
                joints: true,
                obese: true,
                ..HealthFlags::NONE
            },
        );
        let profile = apply_breed(profile, "pug");
        assert_eq!(profile.energy, EnergyLevel::Low);
        assert!(profile.health.brachy);
        assert!(!profile.health.joints);
        assert!(!profile.health.obese);
        assert_eq!(profile.weight_class, WeightClass::Small);
    }
}
