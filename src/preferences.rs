//! Stored user language preferences.
//!
//! Preferences are persisted by the host application (browser storage,
//! server-side session, database row) and only validated here: a record
//! whose primary language is not supported is treated as absent rather than
//! as an error, because detection must never fail on bad persisted state.

use crate::detect::DetectionMethod;
use crate::language::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// A user's persisted language choice.
///
/// Field names serialize in camelCase, matching the JSON shape host web
/// applications store. Language fields hold raw codes (not validated
/// [`Language`] values) because the record originates outside the crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLanguagePreferences {
    /// The explicitly chosen language code
    pub primary_language: String,

    /// Secondary language codes to try before the system default
    #[serde(default)]
    pub fallback_languages: Vec<String>,

    /// When the preference was last applied
    pub last_used: DateTime<Utc>,

    /// How the preference was originally established (e.g., "stored")
    pub detection_method: String,

    /// IANA timezone captured alongside the choice, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl UserLanguagePreferences {
    /// Create a preference record for an explicit user choice.
    pub fn new(language: Language, method: DetectionMethod) -> Self {
        Self {
            primary_language: language.code().to_string(),
            fallback_languages: Vec::new(),
            last_used: Utc::now(),
            detection_method: method.as_str().to_string(),
            timezone: None,
        }
    }

    /// Replace the primary language code with a raw (possibly unsupported)
    /// value, as a host deserializing foreign data might.
    pub fn with_primary_code(mut self, code: &str) -> Self {
        self.primary_language = code.to_string();
        self
    }

    /// Set the fallback language codes.
    pub fn with_fallback_codes(mut self, codes: &[&str]) -> Self {
        self.fallback_languages = codes.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Set the captured timezone.
    pub fn with_timezone(mut self, zone: &str) -> Self {
        self.timezone = Some(zone.to_string());
        self
    }

    /// Parse and validate a stored JSON record.
    ///
    /// # Returns
    /// * `Some(preferences)` when the JSON parses and the primary language is
    ///   supported (unsupported fallback entries are silently dropped)
    /// * `None` for unparseable JSON or an unsupported primary language
    pub fn from_json(raw: &str) -> Option<Self> {
        let parsed: Self = match serde_json::from_str(raw) {
            Ok(parsed) => parsed,
            Err(error) => {
                warn!(%error, "Discarding unparseable stored language preferences");
                return None;
            }
        };
        parsed.validated()
    }

    /// Validate the record against the supported-language set.
    ///
    /// # Returns
    /// * `Some(self)` with unsupported fallback entries removed
    /// * `None` when the primary language is not supported
    pub fn validated(mut self) -> Option<Self> {
        if Language::lookup(&self.primary_language).is_none() {
            warn!(
                primary_language = %self.primary_language,
                "Discarding stored preferences with unsupported primary language"
            );
            return None;
        }
        self.fallback_languages
            .retain(|code| Language::lookup(code).is_some());
        Some(self)
    }

    /// The validated primary language, if supported.
    pub fn primary(&self) -> Option<Language> {
        Language::lookup(&self.primary_language)
    }
}

/// Errors from a preference store backend.
#[derive(Debug, Error)]
pub enum PreferenceStoreError {
    #[error("failed to access preference store: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistence seam for user preferences.
///
/// The host application decides where preferences live; the crate only
/// requires that loaded data be validated before being trusted. `load`
/// returns `Ok(None)` for both a missing record and an invalid one.
pub trait PreferenceStore {
    /// Load the stored preference, if a valid one exists.
    fn load(&self) -> Result<Option<UserLanguagePreferences>, PreferenceStoreError>;

    /// Persist a preference record.
    fn save(&self, preferences: &UserLanguagePreferences) -> Result<(), PreferenceStoreError>;

    /// Delete the stored preference (explicit user reset).
    fn clear(&self) -> Result<(), PreferenceStoreError>;
}

/// A JSON-file-backed preference store.
///
/// Reference implementation of the persistence seam, suitable for local
/// tools and tests; server deployments typically implement
/// [`PreferenceStore`] over their session or database layer instead.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self) -> Result<Option<UserLanguagePreferences>, PreferenceStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        // Invalid content is "no preference", not an error
        Ok(UserLanguagePreferences::from_json(&raw))
    }

    fn save(&self, preferences: &UserLanguagePreferences) -> Result<(), PreferenceStoreError> {
        let json = serde_json::to_string_pretty(preferences)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), PreferenceStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json(primary: &str) -> String {
        format!(
            r#"{{
                "primaryLanguage": "{}",
                "fallbackLanguages": ["ja", "xx"],
                "lastUsed": "2024-06-01T12:00:00Z",
                "detectionMethod": "stored",
                "timezone": "Europe/Paris"
            }}"#,
            primary
        )
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_from_json_valid_record() {
        let prefs = UserLanguagePreferences::from_json(&sample_json("fr")).unwrap();
        assert_eq!(prefs.primary(), Some(Language::FRENCH));
        assert_eq!(prefs.detection_method, "stored");
        assert_eq!(prefs.timezone.as_deref(), Some("Europe/Paris"));
    }

    #[test]
    fn test_from_json_filters_unsupported_fallbacks() {
        let prefs = UserLanguagePreferences::from_json(&sample_json("fr")).unwrap();
        assert_eq!(prefs.fallback_languages, vec!["ja".to_string()]);
    }

    #[test]
    fn test_from_json_unsupported_primary_is_none() {
        assert!(UserLanguagePreferences::from_json(&sample_json("invalid")).is_none());
    }

    #[test]
    fn test_from_json_garbage_is_none() {
        assert!(UserLanguagePreferences::from_json("not json at all").is_none());
        assert!(UserLanguagePreferences::from_json("{}").is_none());
        assert!(UserLanguagePreferences::from_json("").is_none());
    }

    #[test]
    fn test_from_json_missing_fallbacks_defaults_empty() {
        let raw = r#"{
            "primaryLanguage": "de",
            "lastUsed": "2024-06-01T12:00:00Z",
            "detectionMethod": "browser"
        }"#;
        let prefs = UserLanguagePreferences::from_json(raw).unwrap();
        assert!(prefs.fallback_languages.is_empty());
        assert!(prefs.timezone.is_none());
    }

    #[test]
    fn test_serialization_round_trip() {
        let original = UserLanguagePreferences::new(Language::ARABIC, DetectionMethod::Stored)
            .with_fallback_codes(&["en"])
            .with_timezone("Asia/Riyadh");

        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"primaryLanguage\":\"ar\""));

        let restored = UserLanguagePreferences::from_json(&json).unwrap();
        assert_eq!(original, restored);
    }

    // ==================== File Store Tests ====================

    #[test]
    fn test_file_store_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("prefs.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("prefs.json"));

        let prefs = UserLanguagePreferences::new(Language::THAI, DetectionMethod::Stored);
        store.save(&prefs).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.primary(), Some(Language::THAI));
    }

    #[test]
    fn test_file_store_invalid_content_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{\"primaryLanguage\": \"invalid\"}").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("prefs.json"));

        let prefs = UserLanguagePreferences::new(Language::DUTCH, DetectionMethod::Stored);
        store.save(&prefs).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        // Clearing an already-empty store is fine
        store.clear().unwrap();
    }
}
