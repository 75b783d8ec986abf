//! Vernacular content store.
//!
//! A static table of `key -> language -> text`. Text may carry inline markup.
//! Every key must have non-empty text for every supported language; tables
//! that break this are rejected when loaded.

use crate::domain::model::Language;
use crate::domain::ports::ContentProvider;
use crate::utils::error::{Result, SiteError};
use std::collections::HashMap;
use std::path::Path;

const EMBEDDED_CONTENT: &str = include_str!("../../content/vernacular.json");

#[derive(Debug, Clone)]
pub struct ContentStore {
    entries: HashMap<String, HashMap<Language, String>>,
}

impl ContentStore {
    /// Table compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_CONTENT)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::info!("Loading content table from {}", path.as_ref().display());
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: HashMap<String, HashMap<String, String>> = serde_json::from_str(content)?;

        let mut entries = HashMap::with_capacity(raw.len());
        for (key, translations) in raw {
            let mut by_language = HashMap::with_capacity(translations.len());
            for (code, text) in translations {
                let language =
                    Language::from_code(&code).ok_or_else(|| SiteError::ContentError {
                        message: format!("key '{}': unsupported language code '{}'", key, code),
                    })?;
                by_language.insert(language, text);
            }
            entries.insert(key, by_language);
        }

        let store = Self { entries };
        store.check_complete()?;
        tracing::debug!("Content table holds {} keys", store.len());
        Ok(store)
    }

    fn check_complete(&self) -> Result<()> {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();

        for key in keys {
            let translations = &self.entries[key];
            for language in Language::ALL {
                let present = translations
                    .get(&language)
                    .is_some_and(|text| !text.trim().is_empty());
                if !present {
                    return Err(SiteError::ContentError {
                        message: format!("key '{}' has no text for language '{}'", key, language),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl ContentProvider for ContentStore {
    fn get_content(&self, key: &str, language: Language) -> String {
        match self.try_get(key, language) {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!(key, %language, "Unknown content key, rendering key as-is");
                key.to_string()
            }
        }
    }

    fn try_get(&self, key: &str, language: Language) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|translations| translations.get(&language))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_is_complete() {
        let store = ContentStore::embedded().unwrap();
        assert!(!store.is_empty());

        for key in store.keys() {
            for language in Language::ALL {
                assert!(
                    !store.get_content(key, language).trim().is_empty(),
                    "empty text for {} / {}",
                    key,
                    language
                );
            }
        }
    }

    #[test]
    fn test_lookup_selects_language() {
        let store = ContentStore::from_json_str(
            r#"{"aa01": {"en": "Inverters", "hi": "इन्वर्टर"}}"#,
        )
        .unwrap();

        assert_eq!(store.get_content("aa01", Language::English), "Inverters");
        assert_eq!(store.get_content("aa01", Language::Hindi), "इन्वर्टर");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        let store = ContentStore::from_json_str(r#"{"aa01": {"en": "a", "hi": "b"}}"#).unwrap();
        assert_eq!(store.get_content("missing-key", Language::Hindi), "missing-key");
        assert_eq!(store.try_get("missing-key", Language::Hindi), None);
    }

    #[test]
    fn test_missing_translation_rejected() {
        let result = ContentStore::from_json_str(r#"{"aa01": {"en": "only english"}}"#);
        assert!(matches!(result, Err(SiteError::ContentError { .. })));
    }

    #[test]
    fn test_blank_translation_rejected() {
        let result = ContentStore::from_json_str(r#"{"aa01": {"en": "a", "hi": "   "}}"#);
        assert!(matches!(result, Err(SiteError::ContentError { .. })));
    }

    #[test]
    fn test_language_aliases_rejected() {
        for table in [
            r#"{"aa01": {"en": "a", "hi": "b", "English": "c"}}"#,
            r#"{"aa01": {"EN": "a", "hi": "b"}}"#,
            r#"{"aa01": {" en": "a", "hi": "b"}}"#,
        ] {
            let result = ContentStore::from_json_str(table);
            assert!(
                matches!(result, Err(SiteError::ContentError { .. })),
                "{}",
                table
            );
        }
    }

    #[test]
    fn test_unknown_language_code_rejected() {
        let result =
            ContentStore::from_json_str(r#"{"aa01": {"en": "a", "hi": "b", "xx": "c"}}"#);
        assert!(matches!(result, Err(SiteError::ContentError { .. })));
    }
}
