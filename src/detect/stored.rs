//! Stored-preference signal scorer.
//!
//! An explicit user choice outranks any inference, so a valid stored
//! preference scores above the browser and geographic maxima. Invalid
//! records are discarded with a warning rather than failing detection.

use crate::detect::SignalScore;
use crate::language::Language;
use crate::preferences::UserLanguagePreferences;
use tracing::warn;

/// Confidence for an explicit stored preference.
///
/// Sits above the browser cap (0.95) and the geographic cap (0.97) so a
/// valid stored choice always wins when present.
pub(crate) const STORED_CONFIDENCE: f64 = 0.98;

/// Score the stored-preference signal.
///
/// # Returns
/// `None` when no preference is present or its primary language is not
/// supported; the aggregator then falls through to inference.
pub(crate) fn score(preference: Option<&UserLanguagePreferences>) -> Option<SignalScore> {
    let preference = preference?;

    match Language::lookup(&preference.primary_language) {
        Some(language) => Some(SignalScore {
            language,
            confidence: STORED_CONFIDENCE,
        }),
        None => {
            warn!(
                primary_language = %preference.primary_language,
                "Discarding stored preference with unsupported primary language"
            );
            None
        }
    }
}
