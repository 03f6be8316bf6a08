// ABOUTME: Assembles the ordered list of advisory notes for a profile
// ABOUTME: Condition notes in fixed order followed by the range and observe-signals notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

//! Advisory note assembly
//!
//! Order is part of the contract: lifestyle, health, climate, age, then the
//! two closing notes that every recommendation carries. Cold climate and the
//! home lifestyle add nothing.

use cozypaws_core::models::{
    AdvisoryNote, AgeStage, Climate, DogProfile, Lifestyle, MinuteRange, NoteSeverity,
};

use crate::config::NoteMessages;

/// Ordered notes for `profile`, given its adjusted range
#[must_use]
pub fn assemble_notes(
    profile: &DogProfile,
    range: MinuteRange,
    messages: &NoteMessages,
) -> Vec<AdvisoryNote> {
    let health = &profile.health;
    let conditional = [
        (profile.lifestyle == Lifestyle::Yard, &messages.yard, NoteSeverity::Warn),
        (profile.lifestyle == Lifestyle::Street, &messages.street, NoteSeverity::Warn),
        (profile.lifestyle == Lifestyle::Working, &messages.working, NoteSeverity::Warn),
        (health.brachy, &messages.brachy, NoteSeverity::Danger),
        (health.joints, &messages.joints, NoteSeverity::Warn),
        (health.obese, &messages.obese, NoteSeverity::Warn),
        (health.cardio_resp, &messages.cardio_resp, NoteSeverity::Danger),
        (profile.climate == Climate::Hot, &messages.hot_climate, NoteSeverity::Warn),
        (profile.climate == Climate::Altitude, &messages.altitude, NoteSeverity::Warn),
        (profile.age_stage == AgeStage::Senior, &messages.senior, NoteSeverity::Ok),
        (profile.age_stage == AgeStage::Puppy, &messages.puppy, NoteSeverity::Ok),
    ];

    conditional
        .into_iter()
        .filter(|(applies, _, _)| *applies)
        .map(|(_, message, severity)| AdvisoryNote::new(message.clone(), severity))
        .chain([
            AdvisoryNote::new(messages.render_range(range), NoteSeverity::Ok),
            AdvisoryNote::new(messages.observe_signals.clone(), NoteSeverity::Ok),
        ])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozypaws_core::models::{EnergyLevel, HealthFlags, WeightClass};

    fn severities(notes: &[AdvisoryNote]) -> Vec<NoteSeverity> {
        notes.iter().map(|note| note.severity).collect()
    }

    #[test]
    fn test_neutral_adult_gets_closing_notes_only() {
        let messages = NoteMessages::english();
        let profile = DogProfile::adult(EnergyLevel::Moderate, WeightClass::Medium)
            .with_climate(Climate::Cold);
        let notes = assemble_notes(&profile, MinuteRange::new(45, 75), &messages);
        assert_eq!(notes.len(), 2);
        assert_eq!(
            notes[0].message,
            "Suggested range after adjustments: 45–75 min/day."
        );
        assert_eq!(notes[1].message, messages.observe_signals);
    }

    #[test]
    fn test_full_order() {
        let messages = NoteMessages::english();
        let profile = DogProfile::senior(WeightClass::Large)
            .with_lifestyle(Lifestyle::Working)
            .with_climate(Climate::Hot)
            .with_health(HealthFlags {
                joints: true,
                ..HealthFlags::NONE
            });
        let notes = assemble_notes(&profile, MinuteRange::new(30, 60), &messages);
        let texts: Vec<&str> = notes.iter().map(|note| note.message.as_str()).collect();
        assert_eq!(
            texts[..4],
            [
                messages.working.as_str(),
                messages.joints.as_str(),
                messages.hot_climate.as_str(),
                messages.senior.as_str(),
            ]
        );
        assert_eq!(notes.len(), 6);
    }

    #[test]
    fn test_danger_notes_for_brachy_and_cardio() {
        let messages = NoteMessages::english();
        let profile = DogProfile::adult(EnergyLevel::Moderate, WeightClass::Toy)
            .with_climate(Climate::Hot)
            .with_health(HealthFlags {
                brachy: true,
                cardio_resp: true,
                ..HealthFlags::NONE
            });
        let notes = assemble_notes(&profile, MinuteRange::new(20, 30), &messages);
        assert_eq!(
            severities(&notes),
            [
                NoteSeverity::Danger,
                NoteSeverity::Danger,
                NoteSeverity::Warn,
                NoteSeverity::Ok,
                NoteSeverity::Ok,
            ]
        );
        assert_eq!(notes[0].message, messages.brachy);
        assert_eq!(notes[1].message, messages.cardio_resp);
    }

    #[test]
    fn test_puppy_with_altitude_and_yard() {
        let messages = NoteMessages::spanish();
        let profile = DogProfile::puppy(4, WeightClass::Small)
            .with_lifestyle(Lifestyle::Yard)
            .with_climate(Climate::Altitude);
        let notes = assemble_notes(&profile, MinuteRange::new(25, 45), &messages);
        let texts: Vec<&str> = notes.iter().map(|note| note.message.as_str()).collect();
        assert_eq!(
            texts,
            [
                messages.yard.as_str(),
                messages.altitude.as_str(),
                messages.puppy.as_str(),
                "Rango sugerido tras ajustes: 25–45 min/día.",
                messages.observe_signals.as_str(),
            ]
        );
    }
}
