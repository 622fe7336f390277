//! Page renderers.
//!
//! Each page is a pure function from a [`RenderContext`] to a complete HTML
//! document. Every user-facing string comes from the locale's dictionary;
//! a missing key renders as the raw key rather than failing the page.
//!
//! [`RenderContext`]: crate::render::RenderContext

pub mod about;
pub mod contact;
pub mod home;
pub mod impressum;
pub mod not_found;
pub mod services;

use crate::render::{escape_html, RenderContext};

/// Identifiers of the services offered, in display order. Each maps to
/// `services.<id>.title` / `services.<id>.description` in the dictionary.
pub(crate) const SERVICE_IDS: [&str; 10] = [
    "ekg",
    "echo",
    "holter",
    "abpm",
    "ergometry",
    "lufo",
    "abi",
    "stress_echo",
    "device_control",
    "cardio_mrt",
];

/// Identifiers of team members, mapping to `team.<id>.*` keys.
pub(crate) const TEAM_IDS: [&str; 3] = ["dr_farmahini", "yeliz_guenes", "aaliyah_eichberger"];

/// A titled section heading used by several pages.
pub(crate) fn section_heading(ctx: &RenderContext, title_key: &str, subtitle_key: &str) -> String {
    format!(
        "<h2>{}</h2>\n<p class=\"subtitle\">{}</p>",
        escape_html(ctx.t(title_key)),
        escape_html(ctx.t(subtitle_key)),
    )
}
