// ABOUTME: Advisory note message catalogues in English and Spanish
// ABOUTME: Holds one message per note condition plus the range template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use cozypaws_core::models::{Locale, MinuteRange};
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the lower bound in [`NoteMessages::range_template`]
const MIN_PLACEHOLDER: &str = "{min}";
/// Placeholder replaced by the upper bound in [`NoteMessages::range_template`]
const MAX_PLACEHOLDER: &str = "{max}";

/// Message texts for every advisory note
///
/// Severity and order are fixed by the note assembler; a catalogue only
/// supplies wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteMessages {
    /// Yard or rural lifestyle
    pub yard: String,
    /// Street or community dog
    pub street: String,
    /// Working or sport dog
    pub working: String,
    /// Brachycephalic breed
    pub brachy: String,
    /// Sensitive joints
    pub joints: String,
    /// Overweight
    pub obese: String,
    /// Cardiac or respiratory condition
    pub cardio_resp: String,
    /// Hot climate
    pub hot_climate: String,
    /// High altitude
    pub altitude: String,
    /// Senior dog
    pub senior: String,
    /// Puppy
    pub puppy: String,
    /// Adjusted range, with `{min}` and `{max}` placeholders
    pub range_template: String,
    /// Closing reminder to watch the dog's signals
    pub observe_signals: String,
}

impl NoteMessages {
    /// Catalogue for the given locale
    #[must_use]
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::English => Self::english(),
            Locale::Spanish => Self::spanish(),
        }
    }

    /// English catalogue
    #[must_use]
    pub fn english() -> Self {
        Self {
            yard: "Has a yard or lives rurally: sniffing walks outside the home are still essential."
                .to_owned(),
            street: "Street or community dog: used to roaming on its own; once adopted, introduce routines gradually."
                .to_owned(),
            working: "Working or sport dog: prioritize active rest and nutrition that matches the effort."
                .to_owned(),
            brachy: "Brachycephalic: keep each walk to 20 min or less; avoid heat and strenuous effort."
                .to_owned(),
            joints: "Sensitive joints: soft surfaces, several short walks, consider hydrotherapy."
                .to_owned(),
            obese: "Overweight: progress +5–10 min/week alongside a nutrition plan.".to_owned(),
            cardio_resp: "Cardiac or respiratory condition: low intensity and veterinary guidance."
                .to_owned(),
            hot_climate: "Hot climate: walk at dawn or dusk, keep it hydrated and protect its paw pads."
                .to_owned(),
            altitude: "High altitude: if not acclimatized, slow the pace and watch its breathing."
                .to_owned(),
            senior: "Senior: quality over quantity, with pauses to sniff.".to_owned(),
            puppy: "Puppy: several short outings and plenty of rest; positive socialization."
                .to_owned(),
            range_template: "Suggested range after adjustments: {min}–{max} min/day.".to_owned(),
            observe_signals: "Adjust to your dog's signals (panting, fatigue, loss of interest)."
                .to_owned(),
        }
    }

    /// Spanish catalogue
    #[must_use]
    pub fn spanish() -> Self {
        Self {
            yard: "Tiene patio/rural: aún así, salir a oler fuera del hogar sigue siendo clave."
                .to_owned(),
            street: "Callejero/comunitario: suele recorrer distancias por su cuenta; al adoptarlo, introduce rutinas graduales."
                .to_owned(),
            working: "Trabajo/deporte: prioriza descanso activo y nutrición acorde al gasto."
                .to_owned(),
            brachy: "Braquicéfalo: limita cada paseo a ≤20 min; evita calor y esfuerzo.".to_owned(),
            joints: "Articulaciones sensibles: superficie blanda, varios paseos cortos, considera hidroterapia."
                .to_owned(),
            obese: "Sobrepeso: progresa +5–10 min/semana; acompaña con plan nutricional."
                .to_owned(),
            cardio_resp: "Cardiaco/respiratorio: intensidad baja y guía veterinaria.".to_owned(),
            hot_climate: "Clima caluroso: pasea al amanecer/atardecer, hidrata y cuida almohadillas."
                .to_owned(),
            altitude: "Altitud alta: si no está aclimatado, reduce ritmo y observa respiración."
                .to_owned(),
            senior: "Senior: prioriza calidad sobre cantidad, con pausas para olfatear.".to_owned(),
            puppy: "Cachorro: varias salidas cortas y mucho descanso; socialización positiva."
                .to_owned(),
            range_template: "Rango sugerido tras ajustes: {min}–{max} min/día.".to_owned(),
            observe_signals: "Ajusta según señales del perro (jadeo, fatiga, desinterés).".to_owned(),
        }
    }

    /// Render the range note for an adjusted range
    #[must_use]
    pub fn render_range(&self, range: MinuteRange) -> String {
        self.range_template
            .replace(MIN_PLACEHOLDER, &range.min.to_string())
            .replace(MAX_PLACEHOLDER, &range.max.to_string())
    }
}

impl Default for NoteMessages {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_range_english() {
        let messages = NoteMessages::english();
        assert_eq!(
            messages.render_range(MinuteRange::new(20, 30)),
            "Suggested range after adjustments: 20–30 min/day."
        );
    }

    #[test]
    fn test_render_range_spanish() {
        let messages = NoteMessages::for_locale(Locale::Spanish);
        assert_eq!(
            messages.render_range(MinuteRange::new(90, 120)),
            "Rango sugerido tras ajustes: 90–120 min/día."
        );
    }
}
