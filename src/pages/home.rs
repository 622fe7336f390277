//! Home page: hero, services overview, team, and contact sections.

use crate::pages::{section_heading, SERVICE_IDS, TEAM_IDS};
use crate::render::{escape_html, render_page, RenderContext};

pub fn render(ctx: &RenderContext) -> String {
    let body = format!(
        "{}\n{}\n{}\n{}",
        hero(ctx),
        services_overview(ctx),
        team(ctx),
        contact_teaser(ctx)
    );
    render_page(ctx, ctx.t("meta.title"), &body)
}

fn hero(ctx: &RenderContext) -> String {
    format!(
        r#"<section class="hero">
<h1>{title}</h1>
<p class="subtitle">{subtitle}</p>
<p>{description}</p>
<p class="cta">
<a class="button" href="{contact_href}">{cta_appointment}</a>
<a class="button secondary" href="{contact_href}">{cta_contact}</a>
</p>
<p class="emergency">{emergency}</p>
</section>"#,
        title = escape_html(ctx.t("hero.title")),
        subtitle = escape_html(ctx.t("hero.subtitle")),
        description = escape_html(ctx.t("hero.description")),
        contact_href = ctx.href("/contact"),
        cta_appointment = escape_html(ctx.t("hero.cta_appointment")),
        cta_contact = escape_html(ctx.t("hero.cta_contact")),
        emergency = escape_html(ctx.t("hero.emergency")),
    )
}

fn services_overview(ctx: &RenderContext) -> String {
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

    format!(
        r#"<section class="services">
{heading}
<div class="grid">
{cards}
</div>
<p><a href="{services_href}">{services_link}</a></p>
</section>"#,
        heading = section_heading(ctx, "services.title", "services.subtitle"),
        cards = cards,
        services_href = ctx.href("/services"),
        services_link = escape_html(ctx.t("navigation.services")),
    )
}

fn team(ctx: &RenderContext) -> String {
    let members: String = TEAM_IDS
        .iter()
        .map(|id| {
            format!(
                r#"<article class="card">
<h3>{name}</h3>
<p class="role">{role}</p>
<p>{description}</p>
</article>"#,
                name = escape_html(ctx.messages.text(&format!("team.{}.name", id))),
                role = escape_html(ctx.messages.text(&format!("team.{}.role", id))),
                description = escape_html(ctx.messages.text(&format!("team.{}.description", id))),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<section class="team">
{heading}
<div class="grid">
{members}
</div>
</section>"#,
        heading = section_heading(ctx, "team.title", "team.subtitle"),
        members = members,
    )
}

fn contact_teaser(ctx: &RenderContext) -> String {
    format!(
        r#"<section class="contact-teaser">
{heading}
<p><a class="button" href="{contact_href}">{cta}</a></p>
</section>"#,
        heading = section_heading(ctx, "contact.title", "contact.subtitle"),
        contact_href = ctx.href("/contact"),
        cta = escape_html(ctx.t("hero.cta_appointment")),
    )
}
