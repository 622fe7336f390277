//! Locale type: validated, copyable locale handle.
//!
//! A `Locale` is a thin wrapper over a registry code. It can only be
//! constructed for locales that exist in the registry and are enabled, so
//! downstream code never has to handle an unresolved locale.

use crate::i18n::{LocaleConfig, LocaleRegistry, TextDirection};
use anyhow::{bail, Result};

/// A validated locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// ISO 639-1 language code (e.g., "de", "en", "fa")
    code: &'static str,
}

impl Locale {
    /// German, the default locale.
    pub const GERMAN: Locale = Locale { code: "de" };

    /// English.
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Farsi (right-to-left).
    pub const FARSI: Locale = Locale { code: "fa" };

    /// Create a `Locale` from a language code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code names a supported, enabled locale
    /// * `Err` if the code is unknown or the locale is disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale {
                code: config.code, // use the static str from the registry
            }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// The default locale, rendered when no locale prefix is present in
    /// the URL.
    pub fn default_locale() -> Locale {
        let config = LocaleRegistry::get().default_locale();
        Locale { code: config.code }
    }

    /// All enabled locales, in registry display order.
    pub fn list_enabled() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    /// The ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry. This cannot happen for a
    /// `Locale` constructed via `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// The English name of the language (e.g., "German").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// The native name of the language (e.g., "Deutsch").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// The flag glyph shown in the language switcher.
    pub fn flag(&self) -> &'static str {
        self.config().flag
    }

    /// Text direction for rendered pages.
    pub fn direction(&self) -> TextDirection {
        self.config().direction
    }

    /// Whether this is the default locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}
