//! Language type: Flexible, validated language representation.
//!
//! This module provides the `Language` type, a lightweight handle that is
//! guaranteed to refer to a supported, enabled language in the registry.

use crate::registry::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated language.
///
/// This type represents a language that has been validated against the registry.
/// It ensures that only supported, enabled languages can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "fr")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const SPANISH: Language = Language { code: "es" };
    pub const FRENCH: Language = Language { code: "fr" };
    pub const GERMAN: Language = Language { code: "de" };
    pub const ITALIAN: Language = Language { code: "it" };
    pub const PORTUGUESE: Language = Language { code: "pt" };
    pub const DUTCH: Language = Language { code: "nl" };
    pub const RUSSIAN: Language = Language { code: "ru" };
    pub const JAPANESE: Language = Language { code: "ja" };
    pub const CHINESE: Language = Language { code: "zh" };
    pub const KOREAN: Language = Language { code: "ko" };
    pub const ARABIC: Language = Language { code: "ar" };
    pub const HINDI: Language = Language { code: "hi" };
    pub const THAI: Language = Language { code: "th" };
    pub const VIETNAMESE: Language = Language { code: "vi" };

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "fr")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Look up a language code without failing.
    ///
    /// Detection paths must never fail on malformed input, so this is the
    /// non-throwing counterpart to [`Language::from_code`].
    ///
    /// # Returns
    /// * `Some(Language)` if the code is supported and enabled
    /// * `None` otherwise
    pub fn lookup(code: &str) -> Option<Language> {
        let registry = LanguageRegistry::get();
        match registry.get_by_code(code) {
            Some(config) if config.enabled => Some(Language { code: config.code }),
            _ => None,
        }
    }

    /// Get the system default language.
    ///
    /// This is the terminal fallback language used when no detection signal
    /// resolves (typically English).
    pub fn system_default() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`,
    /// `lookup`, or constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language (e.g., "French").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "Français").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the system default language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    /// Languages serialize as their bare code (e.g., `"fr"`), matching the
    /// shape host applications persist and transmit.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_default());
    }

    #[test]
    fn test_arabic_constant() {
        let arabic = Language::ARABIC;
        assert_eq!(arabic.code(), "ar");
        assert_eq!(arabic.name(), "Arabic");
        assert!(!arabic.is_default());
    }

    #[test]
    fn test_all_constants_resolve_in_registry() {
        let all = [
            Language::ENGLISH,
            Language::SPANISH,
            Language::FRENCH,
            Language::GERMAN,
            Language::ITALIAN,
            Language::PORTUGUESE,
            Language::DUTCH,
            Language::RUSSIAN,
            Language::JAPANESE,
            Language::CHINESE,
            Language::KOREAN,
            Language::ARABIC,
            Language::HINDI,
            Language::THAI,
            Language::VIETNAMESE,
        ];
        for lang in all {
            // config() panics if the constant drifts from the registry
            assert_eq!(lang.config().code, lang.code());
        }
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_french() {
        let language = Language::from_code("fr").expect("Should succeed");
        assert_eq!(language.code(), "fr");
        assert_eq!(language.name(), "French");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("xx");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        let result = Language::from_code("");
        assert!(result.is_err());
    }

    // ==================== lookup Tests ====================

    #[test]
    fn test_lookup_supported() {
        let language = Language::lookup("ja");
        assert_eq!(language, Some(Language::JAPANESE));
    }

    #[test]
    fn test_lookup_unsupported_returns_none() {
        assert_eq!(Language::lookup("xx"), None);
        assert_eq!(Language::lookup(""), None);
        assert_eq!(Language::lookup("en-US"), None);
    }

    // ==================== system_default Tests ====================

    #[test]
    fn test_system_default_is_english() {
        let default = Language::system_default();
        assert_eq!(default.code(), "en");
        assert!(default.is_default());
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_language_equality() {
        let lang1 = Language::ENGLISH;
        let lang2 = Language::from_code("en").unwrap();
        assert_eq!(lang1, lang2);
    }

    #[test]
    fn test_language_inequality() {
        assert_ne!(Language::ENGLISH, Language::SPANISH);
    }

    #[test]
    fn test_language_copy() {
        let lang1 = Language::KOREAN;
        let lang2 = lang1; // Copy
        assert_eq!(lang1, lang2); // Both still valid
    }

    #[test]
    fn test_language_display() {
        assert_eq!(Language::CHINESE.to_string(), "zh");
    }

    #[test]
    fn test_language_serializes_as_bare_code() {
        let json = serde_json::to_string(&Language::FRENCH).unwrap();
        assert_eq!(json, "\"fr\"");
    }

    // ==================== Config Access Tests ====================

    #[test]
    fn test_config_access() {
        let lang = Language::SPANISH;
        let config = lang.config();
        assert_eq!(config.code, "es");
        assert_eq!(config.name, "Spanish");
        assert_eq!(config.native_name, "Español");
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Language::GERMAN.native_name(), "Deutsch");
        assert_eq!(Language::RUSSIAN.native_name(), "Русский");
    }
}
