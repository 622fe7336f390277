//! Legal notice page. The German wording is authoritative; other locales
//! carry translations of the same sections.

use crate::render::{escape_html, render_page, RenderContext};

pub fn render(ctx: &RenderContext) -> String {
    let sections = [
        ("impressum.provider", "impressum.provider_text"),
        ("impressum.responsible", "impressum.responsible_text"),
        ("impressum.disclaimer", "impressum.disclaimer_text"),
    ];

    let blocks: String = sections
        .iter()
        .map(|(heading_key, text_key)| {
            format!(
                "<h2>{}</h2>\n<p>{}</p>",
                escape_html(ctx.t(heading_key)),
                escape_html(ctx.t(text_key)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"<section class="impressum">
<h1>{title}</h1>
{blocks}
</section>"#,
        title = escape_html(ctx.t("impressum.title")),
        blocks = blocks,
    );

    render_page(ctx, ctx.t("impressum.title"), &body)
}
