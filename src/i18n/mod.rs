//! Internationalization (i18n) module.
//!
//! All locale-related logic lives here: the supported-locale registry, the
//! path-based locale resolver, the message dictionaries, and the startup
//! translation validator.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Type-safe Locale handle validated against the registry
//! - `resolver`: URL convention — prefix stripping, URL building, switcher targets
//! - `messages`: Per-locale JSON dictionaries with placeholder fallback
//! - `validator`: Key-set completeness validation at startup
//!
//! # Example
//!
//! ```rust,ignore
//! use praxis_web::i18n::{resolver, Locale};
//!
//! let (locale, logical) = resolver::resolve("/en/contact");
//! assert_eq!(locale, Locale::ENGLISH);
//! assert_eq!(logical, "/contact");
//! ```

mod locale;
mod messages;
mod registry;
pub mod resolver;
mod validator;

pub use locale::Locale;
pub use messages::{Dictionary, MessageError, MessageStore};
pub use registry::{LocaleConfig, LocaleRegistry, TextDirection};
pub use validator::{TranslationValidator, ValidationReport};
