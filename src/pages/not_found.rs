//! Localized not-found page, served with HTTP 404.

use crate::render::{escape_html, render_page, RenderContext};

pub fn render(ctx: &RenderContext) -> String {
    let body = format!(
        r#"<section class="not-found">
<h1>{title}</h1>
<p>{description}</p>
<p><a class="button" href="{home_href}">{back_home}</a></p>
</section>"#,
        title = escape_html(ctx.t("not_found.title")),
        description = escape_html(ctx.t("not_found.description")),
        home_href = ctx.href("/"),
        back_home = escape_html(ctx.t("not_found.back_home")),
    );

    render_page(ctx, ctx.t("not_found.title"), &body)
}
