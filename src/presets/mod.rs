// ABOUTME: Convenience presets that pre-fill parts of a dog profile
// ABOUTME: Breed presets set energy and brachycephaly; city presets set climate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

//! Profile presets
//!
//! Presets are applied before explicit user choices, so anything the user
//! sets afterwards wins. They only touch the fields they own.

/// Breed presets
pub mod breeds;
/// City to climate presets
pub mod cities;

pub use breeds::{apply_breed, BreedPreset, BREED_PRESETS};
pub use cities::{apply_city, CityPreset, CITY_PRESETS};
