//! Integration tests for the practice website server.
//!
//! These tests exercise the full request path over real HTTP: locale
//! middleware, resolver, message store, and page rendering together.
//! The server is bound to an ephemeral port per test and queried with a
//! client that does not follow redirects, so redirect behavior is
//! observable.

use praxis_web::config::Config;
use praxis_web::i18n::MessageStore;
use praxis_web::server;

// ==================== Test Helpers ====================

/// Start the app on an ephemeral port and return its base URL.
async fn spawn_server() -> String {
    let config = Config {
        port: 0,
        messages_dir: "messages".into(),
        static_dir: "static".into(),
    };
    let store = MessageStore::load(&config.messages_dir);
    let app = server::build_router(&config, store);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    format!("http://{}", addr)
}

/// HTTP client that surfaces redirects instead of following them.
fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("build client")
}

// ==================== Locale Rendering Tests ====================

#[tokio::test]
async fn test_root_renders_german_home() {
    let base = spawn_server().await;

    let response = client().get(&base).send().await.expect("request");
    assert!(response.status().is_success());

    let body = response.text().await.expect("body");
    assert!(body.contains(r#"<html lang="de" dir="ltr">"#));
    assert!(body.contains("Kardiologische Schwerpunktpraxis Speyer"));
    assert!(body.contains("Unsere Leistungen"));
}

#[tokio::test]
async fn test_en_contact_renders_english_strings() {
    let base = spawn_server().await;

    let response = client()
        .get(format!("{}/en/contact", base))
        .send()
        .await
        .expect("request");
    assert!(response.status().is_success());

    let body = response.text().await.expect("body");
    assert!(body.contains(r#"<html lang="en" dir="ltr">"#));
    assert!(body.contains("Contact &amp; Appointments"));
    assert!(body.contains("Office hours"));
}

#[tokio::test]
async fn test_unprefixed_contact_renders_german_strings() {
    let base = spawn_server().await;

    let response = client()
        .get(format!("{}/contact", base))
        .send()
        .await
        .expect("request");
    assert!(response.status().is_success());

    let body = response.text().await.expect("body");
    assert!(body.contains(r#"<html lang="de""#));
    assert!(body.contains("Kontakt &amp; Termine"));
    assert!(body.contains("Sprechzeiten"));
}

#[tokio::test]
async fn test_fa_page_is_right_to_left() {
    let base = spawn_server().await;

    let response = client()
        .get(format!("{}/fa/services", base))
        .send()
        .await
        .expect("request");
    assert!(response.status().is_success());

    let body = response.text().await.expect("body");
    assert!(body.contains(r#"<html lang="fa" dir="rtl">"#));
    assert!(body.contains("خدمات ما"));
}

// ==================== Language Switcher Tests ====================

#[tokio::test]
async fn test_switcher_on_en_services_offers_unprefixed_german() {
    let base = spawn_server().await;

    let response = client()
        .get(format!("{}/en/services", base))
        .send()
        .await
        .expect("request");
    let body = response.text().await.expect("body");

    // Switching to German drops the prefix; switching to Farsi swaps it
    assert!(body.contains(r#"href="/services""#));
    assert!(body.contains(r#"href="/fa/services""#));
}

#[tokio::test]
async fn test_switcher_on_german_services_offers_fa_prefix() {
    let base = spawn_server().await;

    let response = client()
        .get(format!("{}/services", base))
        .send()
        .await
        .expect("request");
    let body = response.text().await.expect("body");

    assert!(body.contains(r#"href="/fa/services""#));
    assert!(body.contains(r#"href="/en/services""#));
}

// ==================== Redirect Tests ====================

#[tokio::test]
async fn test_default_locale_prefix_redirects_to_unprefixed() {
    let base = spawn_server().await;

    let response = client()
        .get(format!("{}/de/services", base))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 308);
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("location header");
    assert_eq!(location, "/services");
}

#[tokio::test]
async fn test_default_locale_root_redirects_to_root() {
    let base = spawn_server().await;

    let response = client()
        .get(format!("{}/de", base))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 308);
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("location header");
    assert_eq!(location, "/");
}

#[tokio::test]
async fn test_redirect_preserves_query_string() {
    let base = spawn_server().await;

    let response = client()
        .get(format!("{}/de/contact?from=flyer", base))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 308);
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("location header");
    assert_eq!(location, "/contact?from=flyer");
}

// ==================== Fallback and Not-Found Tests ====================

#[tokio::test]
async fn test_unsupported_locale_segment_renders_default_404() {
    let base = spawn_server().await;

    let response = client()
        .get(format!("{}/xx/contact", base))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 404);
    let body = response.text().await.expect("body");
    // Degrades to the default locale, never an error page
    assert!(body.contains(r#"<html lang="de""#));
    assert!(body.contains("Seite nicht gefunden"));
}

#[tokio::test]
async fn test_unknown_page_renders_localized_404() {
    let base = spawn_server().await;

    let response = client()
        .get(format!("{}/en/nope", base))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status().as_u16(), 404);
    let body = response.text().await.expect("body");
    assert!(body.contains(r#"<html lang="en""#));
    assert!(body.contains("Page not found"));
}

// ==================== Static Asset Tests ====================

#[tokio::test]
async fn test_static_assets_bypass_locale_processing() {
    let base = spawn_server().await;

    let response = client()
        .get(format!("{}/static/styles.css", base))
        .send()
        .await
        .expect("request");

    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("css"));

    let body = response.text().await.expect("body");
    assert!(body.contains("language-switcher"));
}

#[tokio::test]
async fn test_favicon_is_not_locale_redirected() {
    let base = spawn_server().await;

    let response = client()
        .get(format!("{}/favicon.ico", base))
        .send()
        .await
        .expect("request");

    // Not shipped in the repo, but it must not be treated as a page either
    assert_ne!(response.status().as_u16(), 308);
}
