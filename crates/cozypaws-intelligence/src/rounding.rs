// ABOUTME: Round-to-step helper used by every calculation step
// ABOUTME: Half-away-from-zero rounding of non-negative minute values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

/// Round `value` to the nearest multiple of `step`, ties away from zero
///
/// Non-positive and non-finite values round to 0. A zero step is treated as 1.
#[must_use]
pub fn round_to_step(value: f64, step: u32) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let step = f64::from(step.max(1));
    let rounded = (value / step).round() * step;
    if rounded >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        rounded as u32
    }
}

/// Integer division rounded half away from zero
#[must_use]
pub fn div_round(numerator: u32, denominator: u32) -> u32 {
    round_to_step(f64::from(numerator) / f64::from(denominator.max(1)), 1)
}
