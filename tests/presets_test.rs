// ABOUTME: Integration tests for breed and city presets
// ABOUTME: Covers reset semantics, untouched fields, and effect on recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use cozypaws::compute_recommendation;
use cozypaws::errors::ErrorCode;
use cozypaws::models::{
    AgeStage, Climate, DogProfile, EnergyLevel, HealthFlags, Lifestyle, WeightClass,
};
use cozypaws::presets::{
    apply_breed, apply_city, BreedPreset, CityPreset, BREED_PRESETS, CITY_PRESETS,
};

fn busy_profile() -> DogProfile {
    DogProfile::puppy(5, WeightClass::Large)
        .with_energy(EnergyLevel::Low)
        .with_lifestyle(Lifestyle::Yard)
        .with_climate(Climate::Cold)
        .with_health(HealthFlags {
            brachy: true,
            joints: true,
            obese: true,
            cardio_resp: true,
        })
}

#[test]
fn test_breed_groups() {
    let counts = |energy: EnergyLevel, brachy: bool| {
        BREED_PRESETS
            .iter()
            .filter(|preset| preset.energy == energy && preset.brachy == brachy)
            .count()
    };
    assert_eq!(counts(EnergyLevel::High, false), 10);
    assert_eq!(counts(EnergyLevel::Moderate, false), 11);
    assert_eq!(counts(EnergyLevel::Low, true), 5);
    assert_eq!(counts(EnergyLevel::Low, false), 6);
}

#[test]
fn test_breed_preset_only_touches_energy_and_health() {
    let profile = apply_breed(busy_profile(), "border_collie");
    assert_eq!(profile.energy, EnergyLevel::High);
    assert_eq!(profile.health, HealthFlags::NONE);
    assert_eq!(profile.age_stage, AgeStage::Puppy);
    assert_eq!(profile.puppy_months, Some(5));
    assert_eq!(profile.weight_class, WeightClass::Large);
    assert_eq!(profile.lifestyle, Lifestyle::Yard);
    assert_eq!(profile.climate, Climate::Cold);
}

#[test]
fn test_unknown_breed_still_resets() {
    let profile = apply_breed(busy_profile(), "mystery_mix");
    assert_eq!(profile.energy, EnergyLevel::Moderate);
    assert_eq!(profile.health, HealthFlags::NONE);
}

#[test]
fn test_brachy_preset_changes_recommendation() {
    let base = DogProfile::adult(EnergyLevel::High, WeightClass::Small);
    let frenchie = apply_breed(base.clone(), "frenchie");
    assert!(frenchie.health.brachy);

    let plain = compute_recommendation(&base);
    let flat_faced = compute_recommendation(&frenchie);
    assert!(flat_faced.minutes_per_day < plain.minutes_per_day);
    assert!(flat_faced.minutes_per_walk <= 20);
}

#[test]
fn test_strict_lookups() {
    assert_eq!(BreedPreset::find("PUG").unwrap().key, "pug");
    assert_eq!(
        BreedPreset::find("wolf").unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
    assert_eq!(CityPreset::find("Tena").unwrap().climate, Climate::Hot);
    assert_eq!(
        CityPreset::find("bogota").unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
}

#[test]
fn test_city_presets() {
    let altitude: Vec<&str> = CITY_PRESETS
        .iter()
        .filter(|city| city.climate == Climate::Altitude)
        .map(|city| city.key)
        .collect();
    assert_eq!(altitude, ["quito", "cuenca", "ambato", "riobamba"]);

    let profile = apply_city(DogProfile::senior(WeightClass::Medium), "esmeraldas");
    assert_eq!(profile.climate, Climate::Hot);

    let unchanged = apply_city(profile.clone(), "");
    assert_eq!(unchanged, profile);
}
