//! Contact page: address, phone, email, office hours, emergency note.

use crate::pages::section_heading;
use crate::render::{escape_html, render_page, RenderContext};

pub fn render(ctx: &RenderContext) -> String {
    let rows = [
        ("contact.address", "contact.address_full"),
        ("contact.phone", "contact.phone_full"),
        ("contact.email", "contact.email_full"),
        ("contact.hours", "contact.hours_weekdays"),
        ("contact.emergency", "contact.emergency_note"),
    ];

    let details: String = rows
        .iter()
        .map(|(label_key, value_key)| {
            format!(
                "<dt>{}</dt>\n<dd>{}</dd>",
                escape_html(ctx.t(label_key)),
                escape_html(ctx.t(value_key)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"<section class="contact">
{heading}
<dl>
{details}
</dl>
</section>"#,
        heading = section_heading(ctx, "contact.title", "contact.subtitle"),
        details = details,
    );

    render_page(ctx, ctx.t("contact.title"), &body)
}
