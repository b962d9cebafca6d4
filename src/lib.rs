//! Multi-signal language detection and resolution.
//!
//! Given partial, possibly conflicting evidence about a visitor — an
//! `Accept-Language` header, an IANA timezone, a region code, a stored user
//! preference — this crate deterministically resolves a single best-fit
//! supported language with a confidence score and an ordered fallback chain,
//! and provides the pluralization and cultural-formatting tables that
//! presentation code needs once a language is resolved.
//!
//! # Architecture
//!
//! - `registry`: single source of truth for all supported languages
//! - `language`: type-safe `Language` validated against the registry
//! - `header`: `Accept-Language` parsing
//! - `tables`: static region/timezone/browser-tag knowledge tables
//! - `detect`: the signal scorers and the decision policy
//! - `preferences`: stored user preference validation and the persistence seam
//! - `plural`: CLDR-style plural categories and template formatting
//! - `cultural`: name/phone/address/color conventions per language
//! - `metrics`: detection observability
//!
//! # Example
//!
//! ```rust
//! use language_resolver::{DetectionContext, LanguageDetector};
//!
//! let detector = LanguageDetector::new();
//! let result = detector.detect(&DetectionContext {
//!     accept_language: Some("fr-FR,fr;q=0.9,en;q=0.8".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(result.language.code(), "fr");
//! ```
//!
//! Every detection path is pure, synchronous, and infallible: malformed
//! input degrades to lower confidence or the system default, never to an
//! error.

pub mod cultural;
pub mod detect;
pub mod header;
pub mod language;
pub mod metrics;
pub mod plural;
pub mod preferences;
pub mod registry;
pub mod tables;

pub use cultural::{
    cultural_rules, format_full_name, matches_phone_pattern, AddressLayout, CulturalFormatRules,
    NameOrder,
};
pub use detect::{
    DetectionContext, DetectionMethod, DetectionResult, LanguageDetector, SignalScore,
};
pub use header::{parse_accept_language, AcceptLanguageEntry};
pub use language::Language;
pub use metrics::{DetectionMetrics, MetricsReport};
pub use plural::{
    common_plural, plural_category, plural_function, pluralize, PluralCategory, PluralForms,
};
pub use preferences::{
    JsonFileStore, PreferenceStore, PreferenceStoreError, UserLanguagePreferences,
};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use tables::{DetectionTables, RegionAssociation};
