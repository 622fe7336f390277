//! HTTP server: router assembly and the page dispatch handler.
//!
//! Request flow: static assets are served directly, the locale middleware
//! redirects default-locale-prefixed paths, and everything else falls
//! through to [`handle_page`], which resolves the locale, picks the page
//! for the logical path, and renders it with the locale's dictionary.

use crate::config::Config;
use crate::i18n::{resolver, MessageStore};
use crate::middleware::locale_redirect;
use crate::pages;
use crate::render::RenderContext;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Shared application state: the message store, loaded once at startup and
/// read-only afterwards.
pub struct AppState {
    pub store: MessageStore,
}

/// Assemble the application router.
pub fn build_router(config: &Config, store: MessageStore) -> Router {
    let state = Arc::new(AppState { store });

    Router::new()
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .route_service(
            "/favicon.ico",
            ServeFile::new(config.static_dir.join("favicon.ico")),
        )
        .fallback(handle_page)
        .layer(middleware::from_fn(locale_redirect))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolve the locale from the request path and render the matching page.
///
/// An unsupported locale segment is treated as content, so it lands here
/// as part of the logical path and renders the default-locale 404 page —
/// never an error page.
async fn handle_page(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let path = uri.path();
    let (locale, logical_path) = resolver::resolve(path);
    let messages = state.store.dictionary(locale);
    let ctx = RenderContext::new(locale, messages, path);

    match logical_path.as_str() {
        "/" => Html(pages::home::render(&ctx)).into_response(),
        "/about" => Html(pages::about::render(&ctx)).into_response(),
        "/services" => Html(pages::services::render(&ctx)).into_response(),
        "/contact" => Html(pages::contact::render(&ctx)).into_response(),
        "/impressum" => Html(pages::impressum::render(&ctx)).into_response(),
        _ => (StatusCode::NOT_FOUND, Html(pages::not_found::render(&ctx))).into_response(),
    }
}
