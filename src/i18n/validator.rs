//! Translation completeness validation.
//!
//! The default locale's dictionary is authoritative for the key set. At
//! startup every other locale is compared against it, so missing
//! translations surface as boot-time warnings instead of only as raw-key
//! placeholders discovered in production pages.

use crate::i18n::{Locale, MessageStore};
use std::collections::BTreeSet;

/// Validation report containing errors and warnings about the loaded
/// dictionaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Critical problems (e.g., the default dictionary is empty)
    pub errors: Vec<String>,

    /// Non-critical problems (missing or surplus keys in a translation)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Validator for translation completeness.
pub struct TranslationValidator;

impl TranslationValidator {
    /// Validate every enabled locale's dictionary against the default
    /// locale's key set.
    ///
    /// - An empty default dictionary is an error: the default locale's
    ///   file is a required, version-controlled asset.
    /// - Keys present in the default dictionary but absent from a
    ///   translation are warnings (those pages will render placeholders).
    /// - Keys present only in a translation are warnings (dead entries).
    pub fn validate(store: &MessageStore) -> ValidationReport {
        let mut report = ValidationReport::new();

        let default_locale = Locale::default_locale();
        let default_dictionary = store.dictionary(default_locale);

        if default_dictionary.is_empty() {
            report.errors.push(format!(
                "Default locale '{}' has an empty dictionary",
                default_locale.code()
            ));
            return report;
        }

        let default_keys: BTreeSet<String> =
            default_dictionary.key_paths().into_iter().collect();

        for locale in Locale::list_enabled() {
            if locale == default_locale {
                continue;
            }

            let keys: BTreeSet<String> =
                store.dictionary(locale).key_paths().into_iter().collect();

            let missing: Vec<_> = default_keys.difference(&keys).cloned().collect();
            if !missing.is_empty() {
                report.warnings.push(format!(
                    "Locale '{}' is missing {} key(s): {}",
                    locale.code(),
                    missing.len(),
                    missing.join(", ")
                ));
            }

            let surplus: Vec<_> = keys.difference(&default_keys).cloned().collect();
            if !surplus.is_empty() {
                report.warnings.push(format!(
                    "Locale '{}' has {} key(s) absent from the default locale: {}",
                    locale.code(),
                    surplus.len(),
                    surplus.join(", ")
                ));
            }
        }

        report
    }
}
