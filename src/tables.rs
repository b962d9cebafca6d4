//! Static knowledge tables backing the detection scorers.
//!
//! Three closed mappings: browser locale tags, regions, and IANA timezones,
//! each associating raw request evidence with a supported language. The
//! tables are plain static slices bundled into a [`DetectionTables`] value
//! owned by the detector, so tests and localized deployments can swap them
//! without touching the scoring algorithm.

use crate::language::Language;

/// Strength of a region-to-language association.
///
/// A region may have several plausible languages with unequal likelihood:
/// French is inferred far more confidently from `FR` than from `BE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionAssociation {
    /// The region's dominant language (e.g., `FR` → French)
    Primary,
    /// A common but not dominant language (e.g., `BE` → French)
    Secondary,
}

/// The lookup tables used by the signal scorers.
#[derive(Debug, Clone)]
pub struct DetectionTables {
    browser_tags: &'static [(&'static str, &'static str)],
    regions: &'static [(&'static str, &'static str, RegionAssociation)],
    timezones: &'static [(&'static str, &'static str, f64)],
}

impl DetectionTables {
    /// The production tables bundled with the crate.
    pub fn builtin() -> Self {
        Self {
            browser_tags: BROWSER_TAG_TABLE,
            regions: REGION_TABLE,
            timezones: TIMEZONE_TABLE,
        }
    }

    /// Build tables from custom mappings (for tests and localized deployments).
    ///
    /// Rows referencing unsupported language codes are not an error; they
    /// simply never resolve, because every lookup re-validates against the
    /// registry.
    pub fn custom(
        browser_tags: &'static [(&'static str, &'static str)],
        regions: &'static [(&'static str, &'static str, RegionAssociation)],
        timezones: &'static [(&'static str, &'static str, f64)],
    ) -> Self {
        Self {
            browser_tags,
            regions,
            timezones,
        }
    }

    /// Resolve a full browser locale tag (e.g., "fr-FR") to a supported language.
    ///
    /// Matching is case-insensitive; the table stores lowercase tags.
    pub fn browser_tag_language(&self, tag: &str) -> Option<Language> {
        let tag = tag.to_ascii_lowercase();
        self.browser_tags
            .iter()
            .find(|(t, _)| *t == tag)
            .and_then(|(_, code)| Language::lookup(code))
    }

    /// Resolve a 2-letter region code to its associated language and strength.
    pub fn region_language(&self, region: &str) -> Option<(Language, RegionAssociation)> {
        self.regions
            .iter()
            .find(|(r, _, _)| r.eq_ignore_ascii_case(region))
            .and_then(|(_, code, assoc)| Language::lookup(code).map(|lang| (lang, *assoc)))
    }

    /// Resolve an IANA timezone id to its associated language and the
    /// confidence of that association.
    ///
    /// Zone names are case-sensitive, as IANA ids are.
    pub fn timezone_language(&self, zone: &str) -> Option<(Language, f64)> {
        self.timezones
            .iter()
            .find(|(z, _, _)| *z == zone)
            .and_then(|(_, code, confidence)| {
                Language::lookup(code).map(|lang| (lang, *confidence))
            })
    }
}

impl Default for DetectionTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Browser locale tag → language code. Tags are stored lowercase.
static BROWSER_TAG_TABLE: &[(&str, &str)] = &[
    ("en-us", "en"),
    ("en-gb", "en"),
    ("en-au", "en"),
    ("en-ca", "en"),
    ("en-nz", "en"),
    ("es-es", "es"),
    ("es-mx", "es"),
    ("es-ar", "es"),
    ("es-co", "es"),
    ("fr-fr", "fr"),
    ("fr-ca", "fr"),
    ("fr-be", "fr"),
    ("fr-ch", "fr"),
    ("de-de", "de"),
    ("de-at", "de"),
    ("de-ch", "de"),
    ("it-it", "it"),
    ("it-ch", "it"),
    ("pt-pt", "pt"),
    ("pt-br", "pt"),
    ("nl-nl", "nl"),
    ("nl-be", "nl"),
    ("ru-ru", "ru"),
    ("ja-jp", "ja"),
    ("zh-cn", "zh"),
    ("zh-tw", "zh"),
    ("zh-hk", "zh"),
    ("zh-sg", "zh"),
    ("zh-hans", "zh"),
    ("zh-hant", "zh"),
    ("ko-kr", "ko"),
    ("ar-sa", "ar"),
    ("ar-eg", "ar"),
    ("ar-ae", "ar"),
    ("ar-ma", "ar"),
    ("hi-in", "hi"),
    ("th-th", "th"),
    ("vi-vn", "vi"),
];

/// Region code → (language code, association strength). Codes are uppercase.
static REGION_TABLE: &[(&str, &str, RegionAssociation)] = &[
    // English
    ("US", "en", RegionAssociation::Primary),
    ("GB", "en", RegionAssociation::Primary),
    ("AU", "en", RegionAssociation::Primary),
    ("NZ", "en", RegionAssociation::Primary),
    ("CA", "en", RegionAssociation::Secondary),
    ("IE", "en", RegionAssociation::Secondary),
    ("SG", "en", RegionAssociation::Secondary),
    // Spanish
    ("ES", "es", RegionAssociation::Primary),
    ("MX", "es", RegionAssociation::Primary),
    ("AR", "es", RegionAssociation::Primary),
    ("CO", "es", RegionAssociation::Primary),
    ("CL", "es", RegionAssociation::Primary),
    ("PE", "es", RegionAssociation::Primary),
    // French
    ("FR", "fr", RegionAssociation::Primary),
    ("BE", "fr", RegionAssociation::Secondary),
    ("LU", "fr", RegionAssociation::Secondary),
    // German
    ("DE", "de", RegionAssociation::Primary),
    ("AT", "de", RegionAssociation::Primary),
    ("CH", "de", RegionAssociation::Secondary),
    // Italian
    ("IT", "it", RegionAssociation::Primary),
    // Portuguese
    ("PT", "pt", RegionAssociation::Primary),
    ("BR", "pt", RegionAssociation::Primary),
    // Dutch
    ("NL", "nl", RegionAssociation::Primary),
    // Russian
    ("RU", "ru", RegionAssociation::Primary),
    // Japanese
    ("JP", "ja", RegionAssociation::Primary),
    // Chinese
    ("CN", "zh", RegionAssociation::Primary),
    ("TW", "zh", RegionAssociation::Primary),
    ("HK", "zh", RegionAssociation::Secondary),
    // Korean
    ("KR", "ko", RegionAssociation::Primary),
    // Arabic
    ("SA", "ar", RegionAssociation::Primary),
    ("EG", "ar", RegionAssociation::Primary),
    ("AE", "ar", RegionAssociation::Secondary),
    ("MA", "ar", RegionAssociation::Secondary),
    // Hindi
    ("IN", "hi", RegionAssociation::Secondary),
    // Thai
    ("TH", "th", RegionAssociation::Primary),
    // Vietnamese
    ("VN", "vi", RegionAssociation::Primary),
];

/// IANA timezone id → (language code, association confidence).
///
/// Multilingual zones (Brussels, Zurich, Hong Kong) carry a reduced
/// confidence; zones with one clear language sit above 0.8.
static TIMEZONE_TABLE: &[(&str, &str, f64)] = &[
    // English
    ("America/New_York", "en", 0.85),
    ("America/Chicago", "en", 0.85),
    ("America/Denver", "en", 0.85),
    ("America/Los_Angeles", "en", 0.85),
    ("Europe/London", "en", 0.85),
    ("Australia/Sydney", "en", 0.85),
    ("Pacific/Auckland", "en", 0.85),
    ("America/Toronto", "en", 0.55),
    // Spanish
    ("Europe/Madrid", "es", 0.85),
    ("America/Mexico_City", "es", 0.85),
    ("America/Bogota", "es", 0.85),
    ("America/Lima", "es", 0.85),
    ("America/Argentina/Buenos_Aires", "es", 0.85),
    ("America/Santiago", "es", 0.85),
    // French
    ("Europe/Paris", "fr", 0.85),
    ("Europe/Brussels", "fr", 0.55),
    ("America/Montreal", "fr", 0.55),
    // German
    ("Europe/Berlin", "de", 0.85),
    ("Europe/Vienna", "de", 0.85),
    ("Europe/Zurich", "de", 0.55),
    // Italian
    ("Europe/Rome", "it", 0.85),
    // Portuguese
    ("Europe/Lisbon", "pt", 0.85),
    ("America/Sao_Paulo", "pt", 0.85),
    // Dutch
    ("Europe/Amsterdam", "nl", 0.85),
    // Russian
    ("Europe/Moscow", "ru", 0.85),
    // Japanese
    ("Asia/Tokyo", "ja", 0.9),
    // Chinese
    ("Asia/Shanghai", "zh", 0.9),
    ("Asia/Taipei", "zh", 0.85),
    ("Asia/Hong_Kong", "zh", 0.55),
    // Korean
    ("Asia/Seoul", "ko", 0.9),
    // Arabic
    ("Asia/Riyadh", "ar", 0.85),
    ("Africa/Cairo", "ar", 0.85),
    ("Asia/Dubai", "ar", 0.55),
    // Hindi
    ("Asia/Kolkata", "hi", 0.55),
    // Thai
    ("Asia/Bangkok", "th", 0.85),
    // Vietnamese
    ("Asia/Ho_Chi_Minh", "vi", 0.85),
];
