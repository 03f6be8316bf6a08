// ABOUTME: Dog profile input record and its categorical enumerations
// ABOUTME: Age stage, energy, weight class, lifestyle, climate, and health flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use serde::{Deserialize, Serialize};

use crate::constants::defaults;
use crate::errors::{AppError, AppResult};

categorical_enum! {
    /// Life stage of the dog
    ///
    /// Anything that is neither puppy nor senior is treated as an adult.
    pub enum AgeStage {
        label: "age stage",
        fallback: Adult,
        /// Young dog, exercise driven by age in months
        Puppy => "puppy",
        /// Adult dog, exercise driven by energy level
        Adult => "adult",
        /// Senior dog, fixed conservative range
        Senior => "senior",
    }
}

categorical_enum! {
    /// Energy level of an adult dog
    pub enum EnergyLevel {
        label: "energy level",
        fallback: Moderate,
        /// Calm breeds and individuals
        Low => "low",
        /// Typical companion dog
        Moderate => "moderate",
        /// Working and sporting breeds
        High => "high",
    }
}

categorical_enum! {
    /// Body size class
    pub enum WeightClass {
        label: "weight class",
        fallback: Medium,
        /// Under ~5 kg
        Toy => "toy",
        /// ~5-10 kg
        Small => "small",
        /// ~10-25 kg
        Medium => "medium",
        /// ~25-45 kg
        Large => "large",
        /// Over ~45 kg
        Giant => "giant",
    }
}

categorical_enum! {
    /// Where and how the dog lives day to day
    pub enum Lifestyle {
        label: "lifestyle",
        fallback: Home,
        /// Indoor companion without outdoor space
        Home => "home",
        /// Has a yard or lives rurally
        Yard => "yard",
        /// Working or sport dog
        Working => "working",
        /// Street or community dog
        Street => "street",
    }
}

categorical_enum! {
    /// Climate the dog is walked in
    pub enum Climate {
        label: "climate",
        fallback: Temperate,
        /// Mild weather
        Temperate => "temperate",
        /// Hot or humid weather
        Hot => "hot",
        /// High altitude
        Altitude => "altitude",
        /// Cold weather
        Cold => "cold",
    }
}

/// Independent health conditions that reduce exercise tolerance
///
/// Flags are not mutually exclusive and compound when several are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthFlags {
    /// Brachycephalic (short-nosed) breed
    pub brachy: bool,
    /// Sensitive joints or orthopedic issues
    pub joints: bool,
    /// Overweight
    pub obese: bool,
    /// Cardiac or respiratory condition
    pub cardio_resp: bool,
}

impl HealthFlags {
    /// No health conditions
    pub const NONE: Self = Self {
        brachy: false,
        joints: false,
        obese: false,
        cardio_resp: false,
    };

    /// Number of flags set
    #[must_use]
    pub fn count(&self) -> usize {
        [self.brachy, self.joints, self.obese, self.cardio_resp]
            .iter()
            .filter(|flag| **flag)
            .count()
    }

    /// Whether no flag is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Input record for one recommendation
///
/// Field names serialize in camelCase so exported documents keep the same
/// shape as the form that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogProfile {
    /// Life stage
    pub age_stage: AgeStage,
    /// Age in months, only meaningful for puppies (domain 1-18, default 6)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puppy_months: Option<u32>,
    /// Energy level, only meaningful for adults
    #[serde(default)]
    pub energy: EnergyLevel,
    /// Body size class
    pub weight_class: WeightClass,
    /// Living situation
    #[serde(default)]
    pub lifestyle: Lifestyle,
    /// Health conditions
    #[serde(flatten)]
    pub health: HealthFlags,
    /// Walking climate
    #[serde(default)]
    pub climate: Climate,
    /// Display label, never used by the calculation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dog_name: Option<String>,
}

impl DogProfile {
    /// Profile with the given stage and size and neutral values everywhere else
    #[must_use]
    pub fn new(age_stage: AgeStage, weight_class: WeightClass) -> Self {
        Self {
            age_stage,
            puppy_months: None,
            energy: EnergyLevel::default(),
            weight_class,
            lifestyle: Lifestyle::default(),
            health: HealthFlags::NONE,
            climate: Climate::default(),
            dog_name: None,
        }
    }

    /// Puppy of the given age in months
    #[must_use]
    pub fn puppy(months: u32, weight_class: WeightClass) -> Self {
        Self {
            puppy_months: Some(months),
            ..Self::new(AgeStage::Puppy, weight_class)
        }
    }

    /// Adult with the given energy level
    #[must_use]
    pub fn adult(energy: EnergyLevel, weight_class: WeightClass) -> Self {
        Self {
            energy,
            ..Self::new(AgeStage::Adult, weight_class)
        }
    }

    /// Senior dog
    #[must_use]
    pub fn senior(weight_class: WeightClass) -> Self {
        Self::new(AgeStage::Senior, weight_class)
    }

    /// Replace the energy level
    #[must_use]
    pub fn with_energy(mut self, energy: EnergyLevel) -> Self {
        self.energy = energy;
        self
    }

    /// Replace the lifestyle
    #[must_use]
    pub fn with_lifestyle(mut self, lifestyle: Lifestyle) -> Self {
        self.lifestyle = lifestyle;
        self
    }

    /// Replace the climate
    #[must_use]
    pub fn with_climate(mut self, climate: Climate) -> Self {
        self.climate = climate;
        self
    }

    /// Replace the health flags
    #[must_use]
    pub fn with_health(mut self, health: HealthFlags) -> Self {
        self.health = health;
        self
    }

    /// Attach a display name; blank names are dropped
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        self.dog_name = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Puppy age with the default applied and clamped to the accepted domain
    #[must_use]
    pub fn effective_puppy_months(&self) -> u32 {
        self.puppy_months
            .unwrap_or(defaults::PUPPY_MONTHS)
            .clamp(defaults::PUPPY_MONTHS_MIN, defaults::PUPPY_MONTHS_MAX)
    }

    /// Display name, if a non-blank one was given
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.dog_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Parse a puppy age strictly
///
/// The engine clamps out-of-domain ages; front ends that want to report them
/// instead validate with this first.
///
/// # Errors
///
/// Returns `InvalidInput` for a non-numeric value and `ValueOutOfRange` for
/// an age outside 1-18 months
pub fn parse_puppy_months(value: &str) -> AppResult<u32> {
    let months: u32 = value.trim().parse().map_err(|_| {
        AppError::invalid_input(format!("Invalid puppy age '{value}': expected whole months"))
    })?;
    if !(defaults::PUPPY_MONTHS_MIN..=defaults::PUPPY_MONTHS_MAX).contains(&months) {
        return Err(AppError::out_of_range(format!(
            "Puppy age {months} must be between {} and {} months",
            defaults::PUPPY_MONTHS_MIN,
            defaults::PUPPY_MONTHS_MAX
        )));
    }
    Ok(months)
}
