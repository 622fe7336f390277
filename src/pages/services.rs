//! Services page: the full diagnostics and therapy catalogue.

use crate::pages::{section_heading, SERVICE_IDS};
use crate::render::{escape_html, render_page, RenderContext};

pub fn render(ctx: &RenderContext) -> String {
    let cards: String = SERVICE_IDS
        .iter()
        .map(|id| {
            format!(
                r#"<article class="card">
<h3>{title}</h3>
<p>{description}</p>
</article>"#,
                title = escape_html(ctx.messages.text(&format!("services.{}.title", id))),
                description =
                    escape_html(ctx.messages.text(&format!("services.{}.description", id))),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"<section class="services">
{heading}
<div class="grid">
{cards}
</div>
<p class="cta">
<a class="button" href="{contact_href}">{cta}</a>
</p>
</section>"#,
        heading = section_heading(ctx, "services.title", "services.subtitle"),
        cards = cards,
        contact_href = ctx.href("/contact"),
        cta = escape_html(ctx.t("hero.cta_appointment")),
    );

    render_page(ctx, ctx.t("services.title"), &body)
}
