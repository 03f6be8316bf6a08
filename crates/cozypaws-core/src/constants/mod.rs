// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Absolute minute bounds, rounding step, input defaults, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

//! Constants module
//!
//! Pure data constants grouped by domain. The calculation crate builds its
//! default configuration from these values, so changing one here changes the
//! default recommendation everywhere.

/// Absolute bounds applied to the adjusted daily range
pub mod bounds {
    /// Lowest allowed lower bound of the adjusted range (minutes/day)
    pub const MIN_ADJUSTED_FLOOR: u32 = 20;
    /// Highest allowed lower bound of the adjusted range (minutes/day)
    pub const MIN_ADJUSTED_CEILING: u32 = 180;
    /// Lowest allowed upper bound of the adjusted range (minutes/day)
    pub const MAX_ADJUSTED_FLOOR: u32 = 30;
    /// Highest allowed upper bound of the adjusted range (minutes/day)
    pub const MAX_ADJUSTED_CEILING: u32 = 240;
    /// Minimum gap between the lower and upper bound
    pub const MIN_RANGE_SPREAD: u32 = 5;
    /// Granularity every rounded minute value snaps to
    pub const ROUNDING_STEP: u32 = 5;
}

/// Defaults for optional input fields
pub mod defaults {
    /// Puppy age assumed when none is given
    pub const PUPPY_MONTHS: u32 = 6;
    /// Youngest puppy age accepted by the engine (months)
    pub const PUPPY_MONTHS_MIN: u32 = 1;
    /// Oldest age still treated with the puppy formula (months)
    pub const PUPPY_MONTHS_MAX: u32 = 18;
}

/// Service identifiers used by logging
pub mod service_names {
    /// Command-line front end
    pub const COZYPAWS_CLI: &str = "cozypaws-cli";
}
