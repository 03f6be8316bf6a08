// ABOUTME: Preset catalog listings for cozypaws-cli
// ABOUTME: Prints breed presets with energy and brachycephaly, and city climates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use cozypaws::presets::{BREED_PRESETS, CITY_PRESETS};

/// Print every breed preset
pub fn print_breeds() {
    println!("{:<16} {:<28} {:<9} BRACHY", "KEY", "BREED", "ENERGY");
    println!("{}", "=".repeat(62));
    for preset in BREED_PRESETS {
        println!(
            "{:<16} {:<28} {:<9} {}",
            preset.key,
            preset.name,
            preset.energy,
            if preset.brachy { "yes" } else { "no" }
        );
    }
}

/// Print every city preset
pub fn print_cities() {
    println!("{:<12} {:<12} CLIMATE", "KEY", "CITY");
    println!("{}", "=".repeat(36));
    for city in CITY_PRESETS {
        println!("{:<12} {:<12} {}", city.key, city.name, city.climate);
    }
}
