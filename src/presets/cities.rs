// ABOUTME: City presets mapping Ecuadorian cities to their walking climate
// ABOUTME: Unknown cities leave the profile's climate unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use cozypaws_core::errors::{AppError, AppResult};
use cozypaws_core::models::{Climate, DogProfile};
use tracing::debug;

/// Climate of a city
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityPreset {
    /// Lowercase key, e.g. `quito`
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Climate dogs are walked in
    pub climate: Climate,
}

const fn city(key: &'static str, name: &'static str, climate: Climate) -> CityPreset {
    CityPreset { key, name, climate }
}

/// Every known city preset
pub const CITY_PRESETS: &[CityPreset] = &[
    city("quito", "Quito", Climate::Altitude),
    city("cuenca", "Cuenca", Climate::Altitude),
    city("ambato", "Ambato", Climate::Altitude),
    city("riobamba", "Riobamba", Climate::Altitude),
    city("guayaquil", "Guayaquil", Climate::Hot),
    city("manta", "Manta", Climate::Hot),
    city("esmeraldas", "Esmeraldas", Climate::Hot),
    city("tena", "Tena", Climate::Hot),
    city("loja", "Loja", Climate::Temperate),
    city("galapagos", "Galápagos", Climate::Temperate),
];

impl CityPreset {
    /// Preset for `key`, case-insensitive
    #[must_use]
    pub fn lookup(key: &str) -> Option<&'static Self> {
        let key = key.trim().to_lowercase();
        CITY_PRESETS.iter().find(|city| city.key == key)
    }

    /// Preset for `key`, failing on unknown cities
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no preset has this key
    pub fn find(key: &str) -> AppResult<&'static Self> {
        Self::lookup(key).ok_or_else(|| AppError::not_found(format!("City preset '{key}'")))
    }
}

/// Set the climate of `profile` from a city key; unknown cities change nothing
#[must_use]
pub fn apply_city(profile: DogProfile, key: &str) -> DogProfile {
    match CityPreset::lookup(key) {
        Some(city) => {
            debug!(city = city.key, climate = %city.climate, "applying city preset");
            profile.with_climate(city.climate)
        }
        None => {
            debug!(city = key, "unknown city preset, climate unchanged");
            profile
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozypaws_core::models::{EnergyLevel, WeightClass};

    #[test]
    fn test_highland_and_coast() {
        let base = DogProfile::adult(EnergyLevel::Moderate, WeightClass::Medium);
        assert_eq!(apply_city(base.clone(), "Quito").climate, Climate::Altitude);
        assert_eq!(apply_city(base.clone(), "guayaquil").climate, Climate::Hot);
        assert_eq!(apply_city(base, "loja").climate, Climate::Temperate);
    }

    #[test]
    fn test_city_table_keys() {
        assert_eq!(CITY_PRESETS.len(), 10);
        for (index, preset) in CITY_PRESETS.iter().enumerate() {
            assert_eq!(preset.key, preset.key.to_lowercase());
            assert!(CITY_PRESETS[index + 1..].iter().all(|other| other.key != preset.key));
            let shouted = preset.key.to_uppercase();
            assert_eq!(CityPreset::lookup(&shouted), Some(preset), "{shouted}");
        }
    }

    #[test]
    fn test_unknown_city_keeps_climate() {
        let base = DogProfile::adult(EnergyLevel::Moderate, WeightClass::Medium)
            .with_climate(Climate::Cold);
        assert_eq!(apply_city(base, "lima").climate, Climate::Cold);
    }
}
