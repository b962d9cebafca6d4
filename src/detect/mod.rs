//! Multi-signal language detection.
//!
//! Given partial, possibly conflicting evidence about a visitor — an
//! `Accept-Language` header, an IANA timezone, a region code, and/or a
//! stored user preference — the detector deterministically chooses a single
//! best-fit supported language, attaches a confidence score, and produces an
//! ordered fallback chain.
//!
//! # Architecture
//!
//! - `browser`: scores the parsed `Accept-Language` entries
//! - `geography`: scores region and timezone evidence
//! - `stored`: scores a persisted user preference
//! - this module: the decision policy combining the three scorers
//!
//! All scorers are pure functions over the static tables; concurrent callers
//! share nothing mutable. No input combination can make detection fail: every
//! degenerate case resolves to the system default at low confidence.

pub(crate) mod browser;
pub(crate) mod geography;
pub(crate) mod stored;

use crate::header::{parse_accept_language, AcceptLanguageEntry};
use crate::language::Language;
use crate::metrics::DetectionMetrics;
use crate::preferences::UserLanguagePreferences;
use crate::tables::DetectionTables;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Confidence attached to the terminal default fallback.
const DEFAULT_CONFIDENCE: f64 = 0.10;

/// Boost applied when the browser and geographic signals agree.
const CORROBORATION_BOOST: f64 = 0.15;

/// Ceiling for corroborated confidence, kept just under 1.0 and above every
/// individual scorer cap so agreement is always a strict improvement.
const CORROBORATION_CAP: f64 = 0.99;

/// The evidence available about a visitor. All fields are optional; an empty
/// context is valid and resolves to the system default.
#[derive(Debug, Clone, Default)]
pub struct DetectionContext {
    /// Raw `Accept-Language` header value, if the request carried one
    pub accept_language: Option<String>,

    /// IANA timezone id (e.g., "Europe/Paris")
    pub timezone: Option<String>,

    /// 2-letter region code (e.g., "FR")
    pub region: Option<String>,

    /// Previously stored user preference, loaded by the host application
    pub stored_preference: Option<UserLanguagePreferences>,
}

/// Which signal produced the final decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMethod {
    Browser,
    Geographic,
    Stored,
    Default,
}

impl DetectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::Browser => "browser",
            DetectionMethod::Geographic => "geographic",
            DetectionMethod::Stored => "stored",
            DetectionMethod::Default => "default",
        }
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate language with the raw confidence its scorer assigned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalScore {
    pub language: Language,
    pub confidence: f64,
}

/// The outcome of a detection call.
///
/// Serializes in camelCase, matching the shape host web applications expect.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// The resolved language
    pub language: Language,

    /// Which signal won
    pub method: DetectionMethod,

    /// Confidence in [0, 1]; below 0.2 for the default fallback
    pub confidence: f64,

    /// Ordered, de-duplicated secondary candidates, ending at the system
    /// default unless the default is the resolved language itself
    pub fallback_chain: Vec<Language>,
}

/// The language detector: owns the lookup tables and the default language.
///
/// Cheap to construct and safe to share across threads; `detect` takes
/// `&self` and touches no mutable state.
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    tables: DetectionTables,
    default_language: Language,
}

impl LanguageDetector {
    /// Create a detector with the builtin tables and the registry's default
    /// language.
    pub fn new() -> Self {
        Self {
            tables: DetectionTables::builtin(),
            default_language: Language::system_default(),
        }
    }

    /// Create a detector with custom tables (for tests and localized
    /// deployments).
    pub fn with_tables(tables: DetectionTables) -> Self {
        Self {
            tables,
            default_language: Language::system_default(),
        }
    }

    /// Override the terminal fallback language.
    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    /// Resolve the best-fit language for the given context.
    ///
    /// Decision policy:
    /// 1. A valid stored preference wins outright (explicit user intent is
    ///    authoritative).
    /// 2. Otherwise the browser and geographic scorers run independently.
    /// 3. Agreement combines confidences with a corroboration bonus; the
    ///    result is strictly more confident than either signal alone.
    /// 4. Disagreement picks the stronger signal; an exact tie breaks toward
    ///    the browser (explicit client preference over inferred geography).
    /// 5. No signal at all resolves to the default language at low
    ///    confidence.
    ///
    /// This function never fails, whatever the context contains.
    pub fn detect(&self, context: &DetectionContext) -> DetectionResult {
        // Explicit user intent short-circuits inference entirely
        if let Some(score) = stored::score(context.stored_preference.as_ref()) {
            let result = DetectionResult {
                language: score.language,
                method: DetectionMethod::Stored,
                confidence: score.confidence,
                fallback_chain: self.stored_fallback_chain(
                    score.language,
                    context.stored_preference.as_ref(),
                ),
            };
            self.finish(&result, false);
            return result;
        }

        let entries = context
            .accept_language
            .as_deref()
            .map(parse_accept_language)
            .unwrap_or_default();

        let browser = browser::score(&entries, &self.tables);
        let geographic = geography::score(
            context.region.as_deref(),
            context.timezone.as_deref(),
            &self.tables,
        );

        let (language, method, confidence, corroborated) = match (browser, geographic) {
            (Some(b), Some(g)) if b.language == g.language => {
                let combined =
                    (b.confidence.max(g.confidence) + CORROBORATION_BOOST).min(CORROBORATION_CAP);
                let method = if g.confidence > b.confidence {
                    DetectionMethod::Geographic
                } else {
                    DetectionMethod::Browser
                };
                (b.language, method, combined, true)
            }
            (Some(b), Some(g)) => {
                if g.confidence > b.confidence {
                    (g.language, DetectionMethod::Geographic, g.confidence, false)
                } else {
                    // Ties break toward the browser signal
                    (b.language, DetectionMethod::Browser, b.confidence, false)
                }
            }
            (Some(b), None) => (b.language, DetectionMethod::Browser, b.confidence, false),
            (None, Some(g)) => (g.language, DetectionMethod::Geographic, g.confidence, false),
            (None, None) => (
                self.default_language,
                DetectionMethod::Default,
                DEFAULT_CONFIDENCE,
                false,
            ),
        };

        let result = DetectionResult {
            language,
            method,
            confidence,
            fallback_chain: self.inferred_fallback_chain(language, &entries, geographic),
        };
        self.finish(&result, corroborated);
        result
    }

    /// Fallback chain for the stored-preference path: the user's own
    /// fallback languages (validated), then the system default.
    fn stored_fallback_chain(
        &self,
        winner: Language,
        preference: Option<&UserLanguagePreferences>,
    ) -> Vec<Language> {
        let mut chain = Vec::new();
        if let Some(preference) = preference {
            for code in &preference.fallback_languages {
                if let Some(language) = Language::lookup(code) {
                    push_candidate(&mut chain, language, winner);
                }
            }
        }
        push_candidate(&mut chain, self.default_language, winner);
        chain
    }

    /// Fallback chain for the inference path: every non-winning candidate
    /// from the header (in header order), the losing geographic candidate,
    /// then the system default.
    fn inferred_fallback_chain(
        &self,
        winner: Language,
        entries: &[AcceptLanguageEntry],
        geographic: Option<SignalScore>,
    ) -> Vec<Language> {
        let mut chain = Vec::new();
        for entry in entries {
            if let Some(language) = browser::resolve_tag(&entry.tag, &self.tables) {
                push_candidate(&mut chain, language, winner);
            }
        }
        if let Some(g) = geographic {
            push_candidate(&mut chain, g.language, winner);
        }
        push_candidate(&mut chain, self.default_language, winner);
        chain
    }

    fn finish(&self, result: &DetectionResult, corroborated: bool) {
        let metrics = DetectionMetrics::global();
        metrics.record_detection(result.method);
        if corroborated {
            metrics.record_corroboration();
        }
        debug!(
            language = %result.language,
            method = %result.method,
            confidence = result.confidence,
            "Resolved visitor language"
        );
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Append a candidate unless it is the winner or already present.
fn push_candidate(chain: &mut Vec<Language>, candidate: Language, winner: Language) {
    if candidate != winner && !chain.contains(&candidate) {
        chain.push(candidate);
    }
}
