//! Browser signal scorer.
//!
//! Scores the visitor's `Accept-Language` preferences against the supported
//! set. The parsed entries arrive already ordered by descending quality, so
//! the first entry that resolves to a supported language wins, and its
//! quality value drives the confidence.

use crate::detect::SignalScore;
use crate::header::AcceptLanguageEntry;
use crate::language::Language;
use crate::tables::DetectionTables;

/// Baseline confidence for a resolvable entry at quality 0.
const CONFIDENCE_FLOOR: f64 = 0.35;

/// How much of the quality value feeds the confidence.
const QUALITY_WEIGHT: f64 = 0.6;

/// Ceiling for browser-derived confidence.
pub(crate) const CONFIDENCE_CAP: f64 = 0.95;

/// Score the browser signal.
///
/// Picks the first (highest-quality) entry that resolves to a supported
/// language. Quality 1.0 produces confidence 0.95; quality 0.3 produces
/// 0.53, low enough for any geographic signal to override.
///
/// # Returns
/// `None` when no entry resolves, so the aggregator falls through to the
/// other scorers.
pub(crate) fn score(
    entries: &[AcceptLanguageEntry],
    tables: &DetectionTables,
) -> Option<SignalScore> {
    entries.iter().find_map(|entry| {
        resolve_tag(&entry.tag, tables).map(|language| SignalScore {
            language,
            confidence: (CONFIDENCE_FLOOR + QUALITY_WEIGHT * entry.quality).min(CONFIDENCE_CAP),
        })
    })
}

/// Resolve a browser locale tag to a supported language.
///
/// Tries the full tag against the browser-tag table first (e.g., "fr-CA"),
/// then falls back to the primary subtag before the `-` (e.g., "fr") if that
/// is itself a supported language.
pub(crate) fn resolve_tag(tag: &str, tables: &DetectionTables) -> Option<Language> {
    if let Some(language) = tables.browser_tag_language(tag) {
        return Some(language);
    }

    let primary = tag.split('-').next().unwrap_or(tag);
    Language::lookup(&primary.to_ascii_lowercase())
}
