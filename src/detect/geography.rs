//! Geographic signal scorer.
//!
//! Infers a language from the visitor's region code and IANA timezone. The
//! two sub-signals are scored independently and then reconciled: agreement
//! earns a corroboration boost, disagreement resolves to the stronger
//! sub-signal, and an exact tie prefers the region (a more direct legal and
//! cultural signal than clock settings).

use crate::detect::SignalScore;
use crate::tables::{DetectionTables, RegionAssociation};

/// Confidence for a region whose dominant language matched.
const REGION_PRIMARY_CONFIDENCE: f64 = 0.85;

/// Confidence for a region with a weaker language association.
const REGION_SECONDARY_CONFIDENCE: f64 = 0.60;

/// Boost applied when region and timezone agree on the same language.
const CORROBORATION_BOOST: f64 = 0.10;

/// Ceiling for geographic confidence, kept just under 1.0.
pub(crate) const CONFIDENCE_CAP: f64 = 0.97;

/// Score the geographic signal.
///
/// # Returns
/// `None` only when both inputs are absent or unrecognized; otherwise a
/// single deterministic candidate.
pub(crate) fn score(
    region: Option<&str>,
    timezone: Option<&str>,
    tables: &DetectionTables,
) -> Option<SignalScore> {
    let region_score = region
        .and_then(|r| tables.region_language(r))
        .map(|(language, association)| SignalScore {
            language,
            confidence: match association {
                RegionAssociation::Primary => REGION_PRIMARY_CONFIDENCE,
                RegionAssociation::Secondary => REGION_SECONDARY_CONFIDENCE,
            },
        });

    let timezone_score = timezone
        .and_then(|z| tables.timezone_language(z))
        .map(|(language, confidence)| SignalScore {
            language,
            confidence,
        });

    match (region_score, timezone_score) {
        (Some(r), Some(t)) if r.language == t.language => Some(SignalScore {
            language: r.language,
            confidence: (r.confidence.max(t.confidence) + CORROBORATION_BOOST).min(CONFIDENCE_CAP),
        }),
        // Disagreement: the stronger sub-signal wins; a tie keeps the region
        (Some(r), Some(t)) => Some(if t.confidence > r.confidence { t } else { r }),
        (score, None) | (None, score) => score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn tables() -> DetectionTables {
        DetectionTables::builtin()
    }

    // ==================== Region-Only Tests ====================

    #[test]
    fn test_primary_region() {
        let score = score(Some("FR"), None, &tables()).unwrap();
        assert_eq!(score.language, Language::FRENCH);
        assert!(score.confidence > 0.8);
    }

    #[test]
    fn test_secondary_region_scores_lower_than_primary() {
        let france = score(Some("FR"), None, &tables()).unwrap();
        let belgium = score(Some("BE"), None, &tables()).unwrap();

        assert_eq!(france.language, belgium.language);
        assert!(belgium.confidence > 0.5);
        assert!(belgium.confidence < france.confidence);
    }

    #[test]
    fn test_unknown_region() {
        assert!(score(Some("ZZ"), None, &tables()).is_none());
    }

    // ==================== Timezone-Only Tests ====================

    #[test]
    fn test_unambiguous_timezone() {
        let score = score(None, Some("Asia/Tokyo"), &tables()).unwrap();
        assert_eq!(score.language, Language::JAPANESE);
        assert!(score.confidence > 0.8);
    }

    #[test]
    fn test_unknown_timezone() {
        assert!(score(None, Some("Mars/Olympus_Mons"), &tables()).is_none());
    }

    // ==================== Corroboration Tests ====================

    #[test]
    fn test_agreement_boosts_confidence() {
        let region_only = score(Some("JP"), None, &tables()).unwrap();
        let timezone_only = score(None, Some("Asia/Tokyo"), &tables()).unwrap();
        let both = score(Some("JP"), Some("Asia/Tokyo"), &tables()).unwrap();

        assert_eq!(both.language, Language::JAPANESE);
        assert!(both.confidence > region_only.confidence);
        assert!(both.confidence > timezone_only.confidence);
        assert!(both.confidence < 1.0);
    }

    #[test]
    fn test_agreement_confidence_stays_under_cap() {
        let both = score(Some("JP"), Some("Asia/Tokyo"), &tables()).unwrap();
        assert!(both.confidence <= CONFIDENCE_CAP);
    }

    // ==================== Disagreement Tests ====================

    #[test]
    fn test_disagreement_prefers_stronger_sub_signal() {
        // Primary region FR (0.85) vs multilingual zone Hong Kong (0.55)
        let score = score(Some("FR"), Some("Asia/Hong_Kong"), &tables()).unwrap();
        assert_eq!(score.language, Language::FRENCH);
    }

    #[test]
    fn test_disagreement_stronger_timezone_wins() {
        // Secondary region BE (0.60) vs unambiguous zone Tokyo (0.9)
        let score = score(Some("BE"), Some("Asia/Tokyo"), &tables()).unwrap();
        assert_eq!(score.language, Language::JAPANESE);
    }

    #[test]
    fn test_disagreement_tie_prefers_region() {
        // Primary region DE (0.85) vs Europe/Rome (0.85): equal confidence
        let score = score(Some("DE"), Some("Europe/Rome"), &tables()).unwrap();
        assert_eq!(score.language, Language::GERMAN);
    }

    #[test]
    fn test_unknown_region_falls_back_to_timezone() {
        let score = score(Some("ZZ"), Some("Europe/Paris"), &tables()).unwrap();
        assert_eq!(score.language, Language::FRENCH);
    }

    // ==================== Absence Tests ====================

    #[test]
    fn test_none_when_both_absent() {
        assert!(score(None, None, &tables()).is_none());
    }

    #[test]
    fn test_none_when_both_unrecognized() {
        assert!(score(Some("ZZ"), Some("Nowhere/Void"), &tables()).is_none());
    }
}
