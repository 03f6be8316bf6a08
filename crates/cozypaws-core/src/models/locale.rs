// ABOUTME: Language selection for note catalogues and plain-text summaries
// ABOUTME: English is the default; Spanish carries the product's native wording
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use serde::{Deserialize, Serialize};

categorical_enum! {
    /// Language used for human-readable output
    ///
    /// The locale never changes numbers, note order, or severities.
    pub enum Locale {
        label: "locale",
        fallback: English,
        /// English wording
        English => "en",
        /// Spanish wording
        Spanish => "es",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_wire_names() {
        assert_eq!("es".parse::<Locale>().unwrap(), Locale::Spanish);
        assert_eq!(Locale::parse_lenient("fr"), Locale::English);
        assert_eq!(Locale::default().to_string(), "en");
    }
}
