//! Cultural formatting rules.
//!
//! Static, read-only conventions per language: personal name order, phone
//! number shape, address layout, and color connotations. Consumed by
//! presentation code; nothing here affects detection.

use crate::language::Language;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Order of given and family names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrder {
    /// Given name first (e.g., "Marie Curie")
    GivenFirst,
    /// Family name first (e.g., "山田 太郎")
    FamilyFirst,
}

/// Order of address components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressLayout {
    /// Street first, country last (Western convention)
    SmallToLarge,
    /// Country or province first, recipient last (East Asian convention)
    LargeToSmall,
}

/// Formatting conventions for one language.
#[derive(Debug, Clone)]
pub struct CulturalFormatRules {
    pub name_order: NameOrder,

    /// Regex source matching a nationally formatted phone number
    pub phone_pattern: &'static str,

    pub address_layout: AddressLayout,

    /// Colors with positive connotations in the culture
    pub auspicious_colors: &'static [&'static str],

    /// Colors to avoid in celebratory contexts
    pub inauspicious_colors: &'static [&'static str],
}

/// Get the formatting rules for a language.
///
/// The match is exhaustive over the supported set; adding a language to the
/// registry without rules here is caught by the registry coverage test.
pub fn cultural_rules(language: Language) -> &'static CulturalFormatRules {
    match language.code() {
        "es" => &SPANISH_RULES,
        "fr" => &FRENCH_RULES,
        "de" => &GERMAN_RULES,
        "it" => &ITALIAN_RULES,
        "pt" => &PORTUGUESE_RULES,
        "nl" => &DUTCH_RULES,
        "ru" => &RUSSIAN_RULES,
        "ja" => &JAPANESE_RULES,
        "zh" => &CHINESE_RULES,
        "ko" => &KOREAN_RULES,
        "ar" => &ARABIC_RULES,
        "hi" => &HINDI_RULES,
        "th" => &THAI_RULES,
        "vi" => &VIETNAMESE_RULES,
        _ => &ENGLISH_RULES,
    }
}

/// Format a personal name in the order the language expects.
pub fn format_full_name(given: &str, family: &str, language: Language) -> String {
    match cultural_rules(language).name_order {
        NameOrder::GivenFirst => format!("{} {}", given, family),
        NameOrder::FamilyFirst => format!("{} {}", family, given),
    }
}

/// Check an input against the language's national phone format.
pub fn matches_phone_pattern(input: &str, language: Language) -> bool {
    phone_regexes()
        .get(language.code())
        .map(|regex| regex.is_match(input))
        .unwrap_or(false)
}

// Compiled phone regexes, one per supported language (cached)
static PHONE_REGEXES: OnceLock<HashMap<&'static str, Regex>> = OnceLock::new();

fn phone_regexes() -> &'static HashMap<&'static str, Regex> {
    PHONE_REGEXES.get_or_init(|| {
        crate::registry::LanguageRegistry::get()
            .list_enabled()
            .iter()
            .map(|config| {
                let language = Language::lookup(config.code)
                    .expect("enabled registry language should resolve");
                let pattern = cultural_rules(language).phone_pattern;
                (
                    config.code,
                    Regex::new(pattern).expect("phone pattern should compile"),
                )
            })
            .collect()
    })
}

static ENGLISH_RULES: CulturalFormatRules = CulturalFormatRules {
    name_order: NameOrder::GivenFirst,
    phone_pattern: r"^\+?1?[\s.-]?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}$",
    address_layout: AddressLayout::SmallToLarge,
    auspicious_colors: &["blue", "green"],
    inauspicious_colors: &[],
};

static SPANISH_RULES: CulturalFormatRules = CulturalFormatRules {
    name_order: NameOrder::GivenFirst,
    phone_pattern: r"^\+?34[\s.-]?\d{3}[\s.-]?\d{3}[\s.-]?\d{3}$|^\d{9}$",
    address_layout: AddressLayout::SmallToLarge,
    auspicious_colors: &["red", "yellow"],
    inauspicious_colors: &[],
};

static FRENCH_RULES: CulturalFormatRules = CulturalFormatRules {
    name_order: NameOrder::GivenFirst,
    phone_pattern: r"^(?:\+33|0)\s?\d(?:[\s.-]?\d{2}){4}$",
    address_layout: AddressLayout::SmallToLarge,
    auspicious_colors: &["blue", "white"],
    inauspicious_colors: &[],
};

static GERMAN_RULES: CulturalFormatRules = CulturalFormatRules {
    name_order: NameOrder::GivenFirst,
    phone_pattern: r"^(?:\+49|0)[\s/-]?\d{2,5}[\s/-]?\d{4,8}$",
    address_layout: AddressLayout::SmallToLarge,
    auspicious_colors: &["green"],
    inauspicious_colors: &[],
};

static ITALIAN_RULES: CulturalFormatRules = CulturalFormatRules {
    name_order: NameOrder::GivenFirst,
    phone_pattern: r"^(?:\+39)?[\s.-]?\d{2,4}[\s.-]?\d{6,8}$",
    address_layout: AddressLayout::SmallToLarge,
    auspicious_colors: &["green", "red"],
    inauspicious_colors: &["purple"],
};

static PORTUGUESE_RULES: CulturalFormatRules = CulturalFormatRules {
    name_order: NameOrder::GivenFirst,
    phone_pattern: r"^(?:\+351|\+55)?[\s.-]?\(?\d{2,3}\)?[\s.-]?\d{4,5}[\s.-]?\d{4}$",
    address_layout: AddressLayout::SmallToLarge,
    auspicious_colors: &["green", "yellow"],
    inauspicious_colors: &[],
};

static DUTCH_RULES: CulturalFormatRules = CulturalFormatRules {
    name_order: NameOrder::GivenFirst,
    phone_pattern: r"^(?:\+31|0)[\s-]?\d{1,3}[\s-]?\d{6,8}$",
    address_layout: AddressLayout::SmallToLarge,
    auspicious_colors: &["orange"],
    inauspicious_colors: &[],
};

static RUSSIAN_RULES: CulturalFormatRules = CulturalFormatRules {
    name_order: NameOrder::GivenFirst,
    phone_pattern: r"^(?:\+7|8)[\s-]?\(?\d{3}\)?[\s-]?\d{3}[\s-]?\d{2}[\s-]?\d{2}$",
    address_layout: AddressLayout::LargeToSmall,
    auspicious_colors: &["red", "gold"],
    inauspicious_colors: &["black"],
};

static JAPANESE_RULES: CulturalFormatRules = CulturalFormatRules {
    name_order: NameOrder::FamilyFirst,
    phone_pattern: r"^(?:\+81[\s-]?|0)\d{1,4}[\s-]?\d{1,4}[\s-]?\d{4}$",
    address_layout: AddressLayout::LargeToSmall,
    auspicious_colors: &["red", "white"],
    inauspicious_colors: &["black"],
};

static CHINESE_RULES: CulturalFormatRules = CulturalFormatRules {
    name_order: NameOrder::FamilyFirst,
    phone_pattern: r"^(?:\+86)?[\s-]?1\d{2}[\s-]?\d{4}[\s-]?\d{4}$",
    address_layout: AddressLayout::LargeToSmall,
    auspicious_colors: &["red", "gold"],
    inauspicious_colors: &["white", "black"],
};

static KOREAN_RULES: CulturalFormatRules = CulturalFormatRules {
    name_order: NameOrder::FamilyFirst,
    phone_pattern: r"^(?:\+82[\s-]?|0)1\d[\s-]?\d{3,4}[\s-]?\d{4}$",
    address_layout: AddressLayout::LargeToSmall,
    auspicious_colors: &["red", "yellow"],
    inauspicious_colors: &["white"],
};

static ARABIC_RULES: CulturalFormatRules = CulturalFormatRules {
    name_order: NameOrder::GivenFirst,
    phone_pattern: r"^(?:\+9665|05)\d[\s-]?\d{3}[\s-]?\d{4}$",
    address_layout: AddressLayout::SmallToLarge,
    auspicious_colors: &["green", "white"],
    inauspicious_colors: &["yellow"],
};

static HINDI_RULES: CulturalFormatRules = CulturalFormatRules {
    name_order: NameOrder::GivenFirst,
    phone_pattern: r"^(?:\+91)?[\s-]?[6-9]\d{4}[\s-]?\d{5}$",
    address_layout: AddressLayout::SmallToLarge,
    auspicious_colors: &["saffron", "red", "yellow"],
    inauspicious_colors: &["black"],
};

static THAI_RULES: CulturalFormatRules = CulturalFormatRules {
    name_order: NameOrder::GivenFirst,
    phone_pattern: r"^(?:\+66|0)\d{1,2}[\s-]?\d{3}[\s-]?\d{4}$",
    address_layout: AddressLayout::SmallToLarge,
    auspicious_colors: &["yellow", "gold"],
    inauspicious_colors: &["black"],
};

static VIETNAMESE_RULES: CulturalFormatRules = CulturalFormatRules {
    name_order: NameOrder::FamilyFirst,
    phone_pattern: r"^(?:\+84|0)\d{2}[\s-]?\d{3}[\s-]?\d{4}$",
    address_layout: AddressLayout::SmallToLarge,
    auspicious_colors: &["red", "yellow"],
    inauspicious_colors: &["black"],
};

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Name Order Tests ====================

    #[test]
    fn test_western_name_order() {
        assert_eq!(
            format_full_name("Marie", "Curie", Language::FRENCH),
            "Marie Curie"
        );
    }

    #[test]
    fn test_east_asian_name_order() {
        assert_eq!(
            format_full_name("太郎", "山田", Language::JAPANESE),
            "山田 太郎"
        );
        assert_eq!(format_full_name("伟", "王", Language::CHINESE), "王 伟");
    }

    #[test]
    fn test_vietnamese_family_first() {
        assert_eq!(
            cultural_rules(Language::VIETNAMESE).name_order,
            NameOrder::FamilyFirst
        );
    }

    // ==================== Address Layout Tests ====================

    #[test]
    fn test_address_layouts() {
        assert_eq!(
            cultural_rules(Language::ENGLISH).address_layout,
            AddressLayout::SmallToLarge
        );
        assert_eq!(
            cultural_rules(Language::JAPANESE).address_layout,
            AddressLayout::LargeToSmall
        );
    }

    // ==================== Phone Pattern Tests ====================

    #[test]
    fn test_us_phone_formats() {
        assert!(matches_phone_pattern("(555) 123-4567", Language::ENGLISH));
        assert!(matches_phone_pattern("555-123-4567", Language::ENGLISH));
        assert!(matches_phone_pattern("+1 555 123 4567", Language::ENGLISH));
        assert!(!matches_phone_pattern("12345", Language::ENGLISH));
    }

    #[test]
    fn test_french_phone_formats() {
        assert!(matches_phone_pattern("01 23 45 67 89", Language::FRENCH));
        assert!(matches_phone_pattern("+33 1 23 45 67 89", Language::FRENCH));
        assert!(!matches_phone_pattern("1234", Language::FRENCH));
    }

    #[test]
    fn test_japanese_phone_formats() {
        assert!(matches_phone_pattern("03-1234-5678", Language::JAPANESE));
        assert!(matches_phone_pattern("+81 3 1234 5678", Language::JAPANESE));
    }

    #[test]
    fn test_every_language_pattern_compiles() {
        // phone_regexes compiles all patterns eagerly; reaching this
        // assertion means none panicked
        assert_eq!(phone_regexes().len(), 15);
    }

    // ==================== Color Tests ====================

    #[test]
    fn test_chinese_color_connotations() {
        let rules = cultural_rules(Language::CHINESE);
        assert!(rules.auspicious_colors.contains(&"red"));
        assert!(rules.inauspicious_colors.contains(&"white"));
    }

    #[test]
    fn test_every_language_has_auspicious_colors() {
        let registry = crate::registry::LanguageRegistry::get();
        for config in registry.list_enabled() {
            let language = Language::lookup(config.code).unwrap();
            assert!(
                !cultural_rules(language).auspicious_colors.is_empty(),
                "{} has no auspicious colors",
                config.code
            );
        }
    }
}
