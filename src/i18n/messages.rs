//! Message store: per-locale translation dictionaries.
//!
//! Each locale has one JSON file (`messages/<code>.json`) holding a nested
//! tree of strings addressed by dot-separated key paths such as
//! `services.ekg.title`. Dictionaries are loaded once at startup and are
//! read-only afterwards, so they can be shared between requests without
//! locking.
//!
//! Failure policy: a missing or corrupt file degrades to an empty
//! dictionary (logged, never fatal), and a missing key renders as the raw
//! key so broken translations are visible but never crash a page.

use crate::i18n::Locale;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Errors that can occur while loading a message dictionary.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("Failed to read message file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse message file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// A single locale's translation dictionary.
///
/// Deserializes transparently from the JSON object at the root of a
/// message file; any other JSON shape is a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    root: serde_json::Map<String, Value>,
}

impl Dictionary {
    /// An empty dictionary, used as the fallback when loading fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a dictionary from JSON text.
    pub fn from_json(path: &str, json: &str) -> Result<Self, MessageError> {
        serde_json::from_str(json).map_err(|source| MessageError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Look up a translation by its dot-separated key path.
    ///
    /// Returns `None` if any segment of the path is missing or the value at
    /// the end of the path is not a string.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut current = &self.root;
        let mut segments = key.split('.').peekable();

        while let Some(segment) = segments.next() {
            let value = current.get(segment)?;
            if segments.peek().is_none() {
                return value.as_str();
            }
            current = value.as_object()?;
        }

        None
    }

    /// Look up a translation, falling back to the raw key as a visible
    /// placeholder when it is missing. Never panics.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        match self.get(key) {
            Some(translation) => translation,
            None => {
                debug!(key, "Missing translation key, rendering placeholder");
                key
            }
        }
    }

    /// Whether the dictionary holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// All leaf key paths in the dictionary, dot-joined and sorted.
    /// Used by the translation validator to compare locales.
    pub fn key_paths(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_key_paths(&self.root, None, &mut keys);
        keys.sort();
        keys
    }
}

fn collect_key_paths(
    object: &serde_json::Map<String, Value>,
    prefix: Option<&str>,
    out: &mut Vec<String>,
) {
    for (key, value) in object {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };

        match value {
            Value::Object(nested) => collect_key_paths(nested, Some(&path), out),
            _ => out.push(path),
        }
    }
}

/// All loaded dictionaries, one per enabled locale.
///
/// Loaded once at startup; read-only afterwards.
pub struct MessageStore {
    dictionaries: HashMap<&'static str, Dictionary>,
}

impl MessageStore {
    /// Load dictionaries for every enabled locale from `dir`.
    ///
    /// A locale whose file is missing or corrupt gets an empty dictionary
    /// and a warning log; loading never fails the process. The default
    /// locale's file is a required, version-controlled asset, so an empty
    /// default dictionary indicates a broken deployment (the translation
    /// validator reports it as an error).
    pub fn load(dir: &Path) -> Self {
        let mut dictionaries = HashMap::new();

        for locale in Locale::list_enabled() {
            let dictionary = match Self::load_locale(dir, locale) {
                Ok(dictionary) => {
                    debug!(
                        locale = locale.code(),
                        keys = dictionary.key_paths().len(),
                        "Loaded message dictionary"
                    );
                    dictionary
                }
                Err(error) => {
                    warn!(
                        locale = locale.code(),
                        %error,
                        "Failed to load message dictionary, falling back to empty"
                    );
                    Dictionary::empty()
                }
            };
            dictionaries.insert(locale.code(), dictionary);
        }

        Self { dictionaries }
    }

    /// Load a single locale's dictionary file.
    fn load_locale(dir: &Path, locale: Locale) -> Result<Dictionary, MessageError> {
        let path = dir.join(format!("{}.json", locale.code()));
        let display = path.display().to_string();

        let json = std::fs::read_to_string(&path).map_err(|source| MessageError::Read {
            path: display.clone(),
            source,
        })?;

        Dictionary::from_json(&display, &json)
    }

    /// The dictionary for a locale. Always returns a dictionary; a locale
    /// that failed to load yields the empty one.
    pub fn dictionary(&self, locale: Locale) -> &Dictionary {
        static EMPTY: OnceLock<Dictionary> = OnceLock::new();
        self.dictionaries
            .get(locale.code())
            .unwrap_or_else(|| EMPTY.get_or_init(Dictionary::empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_messages(dir: &TempDir, code: &str, json: &str) {
        std::fs::write(dir.path().join(format!("{}.json", code)), json).expect("write messages");
    }

    // ==================== Dictionary Lookup Tests ====================

    #[test]
    fn test_get_nested_key() {
        let dictionary = Dictionary::from_json(
            "test",
            r#"{"services": {"ekg": {"title": "EKG", "description": "Elektrokardiogramm"}}}"#,
        )
        .unwrap();

        assert_eq!(dictionary.get("services.ekg.title"), Some("EKG"));
        assert_eq!(
            dictionary.get("services.ekg.description"),
            Some("Elektrokardiogramm")
        );
    }

    #[test]
    fn test_get_top_level_key() {
        let dictionary = Dictionary::from_json("test", r#"{"title": "Praxis"}"#).unwrap();
        assert_eq!(dictionary.get("title"), Some("Praxis"));
    }

    #[test]
    fn test_get_missing_key() {
        let dictionary = Dictionary::from_json("test", r#"{"a": {"b": "c"}}"#).unwrap();
        assert_eq!(dictionary.get("a.x"), None);
        assert_eq!(dictionary.get("x.b"), None);
        assert_eq!(dictionary.get("a.b.c"), None);
    }

    #[test]
    fn test_get_non_string_leaf() {
        let dictionary = Dictionary::from_json("test", r#"{"a": {"b": 42}}"#).unwrap();
        assert_eq!(dictionary.get("a.b"), None);
        // Path stopping at an object is also not a string
        assert_eq!(dictionary.get("a"), None);
    }

    #[test]
    fn test_text_falls_back_to_raw_key() {
        let dictionary = Dictionary::from_json("test", r#"{"hero": {"title": "Titel"}}"#).unwrap();
        assert_eq!(dictionary.text("hero.title"), "Titel");
        assert_eq!(dictionary.text("hero.missing"), "hero.missing");
    }

    #[test]
    fn test_empty_dictionary() {
        let dictionary = Dictionary::empty();
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.get("anything"), None);
        assert_eq!(dictionary.text("anything"), "anything");
    }

    #[test]
    fn test_key_paths_flattened_and_sorted() {
        let dictionary = Dictionary::from_json(
            "test",
            r#"{"nav": {"home": "a", "contact": "b"}, "title": "c"}"#,
        )
        .unwrap();

        assert_eq!(
            dictionary.key_paths(),
            vec!["nav.contact", "nav.home", "title"]
        );
    }

    // ==================== Parse Error Tests ====================

    #[test]
    fn test_from_json_invalid() {
        let result = Dictionary::from_json("test", "not json {");
        assert!(matches!(result, Err(MessageError::Parse { .. })));
    }

    #[test]
    fn test_from_json_not_an_object() {
        // The root of a message file must be a JSON object
        let result = Dictionary::from_json("test", r#"["an", "array"]"#);
        assert!(matches!(result, Err(MessageError::Parse { .. })));
    }

    // ==================== Store Loading Tests ====================

    #[test]
    fn test_load_known_good_locale() {
        let dir = TempDir::new().expect("temp dir");
        write_messages(&dir, "de", r#"{"hero": {"title": "Herzpraxis"}}"#);
        write_messages(&dir, "en", r#"{"hero": {"title": "Heart practice"}}"#);
        write_messages(&dir, "fa", r#"{"hero": {"title": "مطب قلب"}}"#);

        let store = MessageStore::load(dir.path());

        assert!(!store.dictionary(Locale::GERMAN).is_empty());
        assert_eq!(
            store.dictionary(Locale::ENGLISH).get("hero.title"),
            Some("Heart practice")
        );
    }

    #[test]
    fn test_load_missing_file_yields_empty_without_raising() {
        let dir = TempDir::new().expect("temp dir");
        write_messages(&dir, "de", r#"{"hero": {"title": "Herzpraxis"}}"#);
        // en.json and fa.json intentionally absent

        let store = MessageStore::load(dir.path());

        assert!(!store.dictionary(Locale::GERMAN).is_empty());
        assert!(store.dictionary(Locale::ENGLISH).is_empty());
        assert!(store.dictionary(Locale::FARSI).is_empty());
    }

    #[test]
    fn test_load_corrupt_file_yields_empty() {
        let dir = TempDir::new().expect("temp dir");
        write_messages(&dir, "de", r#"{"ok": "yes"}"#);
        write_messages(&dir, "en", "{ definitely not json");
        write_messages(&dir, "fa", r#"{"ok": "بله"}"#);

        let store = MessageStore::load(dir.path());

        assert!(store.dictionary(Locale::ENGLISH).is_empty());
        assert_eq!(store.dictionary(Locale::FARSI).get("ok"), Some("بله"));
    }

    #[test]
    fn test_load_nonexistent_directory() {
        let store = MessageStore::load(Path::new("/definitely/not/a/real/dir"));

        for locale in Locale::list_enabled() {
            assert!(store.dictionary(locale).is_empty());
        }
    }

    #[test]
    fn test_missing_key_degrades_to_placeholder_per_locale() {
        let dir = TempDir::new().expect("temp dir");
        write_messages(&dir, "de", r#"{"nav": {"home": "Startseite", "team": "Team"}}"#);
        write_messages(&dir, "en", r#"{"nav": {"home": "Home"}}"#);
        write_messages(&dir, "fa", r#"{"nav": {"home": "خانه"}}"#);

        let store = MessageStore::load(dir.path());

        assert_eq!(store.dictionary(Locale::GERMAN).text("nav.team"), "Team");
        // Key absent in English: visible placeholder, no crash
        assert_eq!(store.dictionary(Locale::ENGLISH).text("nav.team"), "nav.team");
    }
}
