// ABOUTME: Plain-text recommendation summary in English or Spanish
// ABOUTME: Four fixed lines plus an optional severity-tagged notes listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CozyPaws

use cozypaws_core::models::{AdvisoryNote, Locale};

use super::report::RecommendationReport;

struct SummaryLabels {
    title: &'static str,
    name_joiner: &'static str,
    daily: &'static str,
    range: &'static str,
    walks: &'static str,
    each: &'static str,
    enrichment: &'static str,
    per_day_unit: &'static str,
}

const ENGLISH: SummaryLabels = SummaryLabels {
    title: "CozyPaws — Summary",
    name_joiner: " for ",
    daily: "Daily minutes",
    range: "range",
    walks: "Walks/day",
    each: "min each",
    enrichment: "Mental enrichment",
    per_day_unit: "min/day",
};

const SPANISH: SummaryLabels = SummaryLabels {
    title: "CozyPaws — Resumen",
    name_joiner: " para ",
    daily: "Minutos diarios",
    range: "rango",
    walks: "Paseos/día",
    each: "min cada uno",
    enrichment: "Enriquecimiento mental",
    per_day_unit: "min/día",
};

const fn labels(locale: Locale) -> &'static SummaryLabels {
    match locale {
        Locale::English => &ENGLISH,
        Locale::Spanish => &SPANISH,
    }
}

/// Four-line summary of a report
#[must_use]
pub fn format_summary(report: &RecommendationReport, locale: Locale) -> String {
    let labels = labels(locale);
    let figures = &report.recommendation;
    let name = report
        .profile
        .display_name()
        .map(|name| format!("{}{name}", labels.name_joiner))
        .unwrap_or_default();

    [
        format!("{}{name}", labels.title),
        format!(
            "{}: {} ({} {}–{})",
            labels.daily,
            figures.minutes_per_day,
            labels.range,
            figures.recommended_range.min,
            figures.recommended_range.max
        ),
        format!(
            "{}: {} • {} {}",
            labels.walks, figures.walks_per_day, figures.minutes_per_walk, labels.each
        ),
        format!(
            "{}: {} {}",
            labels.enrichment, figures.enrichment_minutes, labels.per_day_unit
        ),
    ]
    .join("\n")
}

/// One line per note, prefixed with its severity tag
#[must_use]
pub fn format_notes(notes: &[AdvisoryNote]) -> String {
    notes
        .iter()
        .map(|note| format!("[{}] {}", note.severity.as_str(), note.message))
        .collect::<Vec<_>>()
        .join("\n")
}
