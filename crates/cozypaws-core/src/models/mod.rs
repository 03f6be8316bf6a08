// ABOUTME: Core data models for dog exercise recommendations
// ABOUTME: Re-exports the dog profile input record, output record, notes, and locale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

//! # Data Models
//!
//! - `DogProfile`: the validated input record handed to the engine
//! - `ExerciseRecommendation`: the computed output record
//! - `AdvisoryNote` / `NoteSeverity`: ordered advisory messages
//! - `Locale`: language of the note catalogue and summaries
//!
//! Every categorical field is a closed enumeration. Unknown wire values
//! deserialize to the neutral variant of their enum instead of failing, so a
//! record coming from a loosely validated form still yields a recommendation.

/// Declares a closed categorical enum with lowercase wire names, a strict
/// `FromStr`, and a lenient parse that falls back to a neutral variant.
macro_rules! categorical_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            label: $label:literal,
            fallback: $fallback:ident,
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "&'static str")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            /// Lowercase wire name
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }

            /// Parse a wire name, mapping unknown values to the neutral variant
            #[must_use]
            pub fn parse_lenient(value: &str) -> Self {
                value.parse().unwrap_or_else(|_| {
                    tracing::debug!(
                        value,
                        category = $label,
                        fallback = Self::$fallback.as_str(),
                        "unknown categorical value, using fallback"
                    );
                    Self::$fallback
                })
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$fallback
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $( $wire => Ok(Self::$variant), )+
                    other => Err($crate::errors::AppError::invalid_input(format!(
                        "Unknown {}: '{other}'. Valid options: {}",
                        $label,
                        [$( $wire ),+].join(", ")
                    ))),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::parse_lenient(&value)
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod dog;
mod locale;
mod recommendation;

pub use dog::{
    parse_puppy_months, AgeStage, Climate, DogProfile, EnergyLevel, HealthFlags, Lifestyle,
    WeightClass,
};
pub use locale::Locale;
pub use recommendation::{AdvisoryNote, ExerciseRecommendation, MinuteRange, NoteSeverity};
