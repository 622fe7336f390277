//! HTML rendering: page shell, navigation, language switcher.
//!
//! Rendering is purely functional: every page is built from a
//! `RenderContext` holding the resolved locale and its dictionary, threaded
//! explicitly from the request handler down into each section. There is no
//! module-global translation table, so concurrent requests for different
//! locales cannot observe each other's state.

use crate::i18n::{resolver, Dictionary, Locale};
use chrono::{Datelike, Utc};
use tracing::warn;

/// Everything a page needs to render: the active locale, its dictionary,
/// and the raw request path (used by the language switcher).
pub struct RenderContext<'a> {
    pub locale: Locale,
    pub messages: &'a Dictionary,
    pub path: String,
}

impl<'a> RenderContext<'a> {
    pub fn new(locale: Locale, messages: &'a Dictionary, path: impl Into<String>) -> Self {
        Self {
            locale,
            messages,
            path: path.into(),
        }
    }

    /// Translated string for a dot-separated key, or the raw key as a
    /// visible placeholder when the translation is missing.
    pub fn t<'s>(&'s self, key: &'s str) -> &'s str {
        self.messages.text(key)
    }

    /// URL for a logical path in the active locale.
    pub fn href(&self, logical_path: &str) -> String {
        resolver::url_for(self.locale, logical_path)
    }

    /// URL the language switcher navigates to for a target locale.
    ///
    /// If the current path is malformed the error is logged and the link
    /// points back at the current page, so the user stays where they are
    /// instead of navigating to a broken URL.
    pub fn switch_href(&self, target: Locale) -> String {
        match resolver::switch_href(&self.path, target) {
            Ok(url) => url,
            Err(error) => {
                warn!(path = %self.path, target = target.code(), %error,
                    "Language switch URL computation failed, staying on current page");
                self.path.clone()
            }
        }
    }
}

/// Escape a string for inclusion in HTML text or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap a page body in the document shell: `<html lang dir>`, head,
/// header with navigation and language switcher, and footer.
pub fn render_page(ctx: &RenderContext, title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" dir="{dir}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="{description}">
<title>{title}</title>
<link rel="stylesheet" href="/static/styles.css">
</head>
<body>
{header}
<main>
{body}
</main>
{footer}
</body>
</html>
"#,
        lang = ctx.locale.code(),
        dir = ctx.locale.direction().as_str(),
        description = escape_html(ctx.t("meta.description")),
        title = escape_html(title),
        header = render_header(ctx),
        body = body,
        footer = render_footer(ctx),
    )
}

fn render_header(ctx: &RenderContext) -> String {
    let nav_items = [
        ("/", "navigation.home"),
        ("/services", "navigation.services"),
        ("/about", "navigation.about"),
        ("/contact", "navigation.contact"),
    ];

    let links: String = nav_items
        .iter()
        .map(|(logical, key)| {
            format!(
                r#"<a href="{}">{}</a>"#,
                ctx.href(logical),
                escape_html(ctx.t(key))
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<header>
<a class="brand" href="{home}">{brand}</a>
<nav>
{links}
</nav>
{switcher}
</header>"#,
        home = ctx.href("/"),
        brand = escape_html(ctx.t("footer.practice_name")),
        links = links,
        switcher = render_language_switcher(ctx),
    )
}

/// One anchor per enabled locale. Plain links so a switch is a full
/// navigation, letting locale-dependent resources re-resolve consistently.
fn render_language_switcher(ctx: &RenderContext) -> String {
    let options: String = Locale::list_enabled()
        .into_iter()
        .map(|locale| {
            let class = if locale == ctx.locale {
                r#" class="active""#
            } else {
                ""
            };
            format!(
                r#"<a{class} href="{href}" dir="{dir}">{flag} {name}</a>"#,
                class = class,
                href = ctx.switch_href(locale),
                dir = locale.direction().as_str(),
                flag = locale.flag(),
                name = escape_html(locale.native_name()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div class="language-switcher" aria-label="{label}">
{options}
</div>"#,
        label = escape_html(ctx.t("language.label")),
        options = options,
    )
}

fn render_footer(ctx: &RenderContext) -> String {
    format!(
        r#"<footer>
<p>{practice} &middot; {doctor}</p>
<p class="emergency">{emergency}</p>
<nav>
<a href="{imprint_href}">{imprint}</a>
</nav>
<p class="copyright">&copy; {year} {practice}</p>
</footer>"#,
        practice = escape_html(ctx.t("footer.practice_name")),
        doctor = escape_html(ctx.t("footer.doctor_name")),
        emergency = escape_html(ctx.t("footer.emergency_note")),
        imprint_href = ctx.href("/impressum"),
        imprint = escape_html(ctx.t("footer.imprint")),
        year = Utc::now().year(),
    )
}
