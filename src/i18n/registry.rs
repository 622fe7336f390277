//! Locale registry: single source of truth for all supported locales.
//!
//! The registry holds the fixed set of locales the site is built for,
//! including display metadata and text direction. It uses a singleton with
//! `OnceLock` for thread-safe initialization and immutable access thereafter.

use std::sync::OnceLock;

/// Text directionality of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    /// The value used for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::LeftToRight => "ltr",
            TextDirection::RightToLeft => "rtl",
        }
    }
}

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "de", "en", "fa")
    pub code: &'static str,

    /// English name of the language (e.g., "German")
    pub name: &'static str,

    /// Native name of the language (e.g., "Deutsch")
    pub native_name: &'static str,

    /// Flag glyph shown in the language switcher
    pub flag: &'static str,

    /// Text direction for rendered pages
    pub direction: TextDirection,

    /// Whether this is the default locale (exactly one must be true).
    /// The default locale is rendered for unprefixed URLs and its code
    /// never appears as a URL prefix.
    pub is_default: bool,

    /// Whether this locale is enabled for routing and rendering
    pub enabled: bool,
}

/// Global locale registry singleton.
///
/// Initialized once on first access and immutable thereafter, so it can be
/// shared freely between concurrent requests.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Look up a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All enabled locales, in display order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// The default locale configuration.
    ///
    /// # Panics
    /// Panics if no default locale is configured or more than one is
    /// (either indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check whether a code names a supported, enabled locale.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// The fixed locale set the site is built for: German (default, unprefixed
/// in URLs), English, and Farsi (right-to-left).
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            flag: "🇩🇪",
            direction: TextDirection::LeftToRight,
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            flag: "🇺🇸",
            direction: TextDirection::LeftToRight,
            is_default: false,
            enabled: true,
        },
        LocaleConfig {
            code: "fa",
            name: "Farsi",
            native_name: "فارسی",
            flag: "🇮🇷",
            direction: TextDirection::RightToLeft,
            is_default: false,
            enabled: true,
        },
    ]
}
