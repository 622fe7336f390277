//! Route middleware: locale handling in front of page routing.
//!
//! Two responsibilities, applied to every navigable request:
//!
//! - Static assets and API paths bypass locale processing entirely.
//! - Paths carrying the default locale's prefix (`/de/...`) are redirected
//!   permanently to their unprefixed spelling, so the two spellings never
//!   coexist as distinct routes.
//!
//! There is deliberately no `Accept-Language` detection: an unprefixed path
//! always renders the default locale, regardless of client preference, so
//! URLs stay stable.

use crate::i18n::resolver;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

static EXCLUDED_PATH_REGEX: OnceLock<Regex> = OnceLock::new();

/// Paths that bypass locale processing: API endpoints, the static asset
/// tree, the favicon, and anything with a common image extension.
pub fn is_excluded_path(path: &str) -> bool {
    let regex = EXCLUDED_PATH_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^/(api/|api$|static/|favicon\.ico$)|\.(jpg|jpeg|png|gif|svg|webp|ico)$")
            .expect("excluded-path regex is valid")
    });

    regex.is_match(path)
}

/// axum middleware applying the locale routing rules above.
pub async fn locale_redirect(request: Request, next: Next) -> Response {
    let path = request.uri().path();

    if is_excluded_path(path) {
        return next.run(request).await;
    }

    if let Some(unprefixed) = resolver::strip_default_prefix(path) {
        let target = match request.uri().query() {
            Some(query) => format!("{}?{}", unprefixed, query),
            None => unprefixed,
        };
        debug!(from = path, to = %target, "Redirecting default-locale-prefixed path");
        return Redirect::permanent(&target).into_response();
    }

    next.run(request).await
}
