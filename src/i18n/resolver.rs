//! Locale resolution for request paths.
//!
//! URL convention: the default locale is unprefixed (`/contact`), every
//! other locale is path-prefixed (`/en/contact`, `/fa/contact`). This
//! module is the single place that knows the convention; the middleware and
//! the language switcher both go through it so they can never disagree on
//! what counts as a locale prefix.

use crate::i18n::Locale;
use anyhow::{bail, Result};

/// Resolve a raw request path into the active locale and the logical path
/// (the path with any locale prefix stripped).
///
/// A leading segment is stripped if and only if it exactly matches the code
/// of a non-default enabled locale. A segment that merely looks like a
/// locale code (`/xx/...`) is treated as content, so unsupported prefixes
/// degrade to default-locale rendering instead of an error.
///
/// The returned logical path always starts with `/`.
pub fn resolve(path: &str) -> (Locale, String) {
    let path = if path.starts_with('/') { path } else { "/" };

    if let Some((code, rest)) = split_first_segment(path) {
        if let Ok(locale) = Locale::from_code(code) {
            if !locale.is_default() {
                return (locale, rest);
            }
        }
    }

    (Locale::default_locale(), path.to_string())
}

/// Build the canonical URL for a locale and logical path.
///
/// Inverse of [`resolve`]: the default locale stays unprefixed, every other
/// locale gets `/<code>` prepended, with `/<code>` alone for the root so no
/// trailing slash is produced.
pub fn url_for(locale: Locale, logical_path: &str) -> String {
    let logical_path = if logical_path.starts_with('/') {
        logical_path
    } else {
        "/"
    };

    if locale.is_default() {
        logical_path.to_string()
    } else if logical_path == "/" {
        format!("/{}", locale.code())
    } else {
        format!("/{}{}", locale.code(), logical_path)
    }
}

/// Compute the URL the language switcher navigates to.
///
/// Strips any recognized locale prefix from the current path (via
/// [`resolve`], keeping the switcher consistent with the resolver by
/// construction) and re-applies the prefixing rule for the target locale.
///
/// # Errors
/// Fails on a malformed current path (one not starting with `/`). Callers
/// are expected to stay on the current page in that case rather than
/// navigate to a broken URL.
pub fn switch_href(current_path: &str, target: Locale) -> Result<String> {
    if !current_path.starts_with('/') {
        bail!("Malformed path for language switch: '{}'", current_path);
    }

    let (_, logical_path) = resolve(current_path);
    Ok(url_for(target, &logical_path))
}

/// If the path carries the default locale's code as a prefix, return the
/// unprefixed spelling, otherwise `None`.
///
/// The prefixed and unprefixed forms of the default locale must never
/// coexist as distinct routes; the middleware uses this to redirect
/// `/de/...` to `/...`.
pub fn strip_default_prefix(path: &str) -> Option<String> {
    let default_code = Locale::default_locale().code();
    let (code, rest) = split_first_segment(path)?;

    if code == default_code {
        Some(rest)
    } else {
        None
    }
}

/// Split off the first path segment. Returns the segment and the remainder
/// (always `/`-prefixed, `/` when the segment was the whole path), or
/// `None` for the bare root path.
fn split_first_segment(path: &str) -> Option<(&str, String)> {
    let rest = path.strip_prefix('/')?;
    if rest.is_empty() {
        return None;
    }

    match rest.split_once('/') {
        Some((first, remainder)) if !first.is_empty() => {
            if remainder.is_empty() {
                Some((first, "/".to_string()))
            } else {
                Some((first, format!("/{}", remainder)))
            }
        }
        None => Some((rest, "/".to_string())),
        _ => None,
    }
}
