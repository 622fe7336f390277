//! About page: practice introduction and the doctor's background.

use crate::pages::{section_heading, TEAM_IDS};
use crate::render::{escape_html, render_page, RenderContext};

pub fn render(ctx: &RenderContext) -> String {
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

    let body = format!(
        r#"<section class="about">
{heading}
<p>{intro}</p>
<div class="highlights">
<article>
<h3>{education}</h3>
<p>{education_text}</p>
</article>
<article>
<h3>{specialization}</h3>
<p>{specialization_text}</p>
</article>
</div>
</section>
<section class="team">
<h2>{team_title}</h2>
<div class="grid">
{members}
</div>
</section>"#,
        heading = section_heading(ctx, "about.title", "about.subtitle"),
        intro = escape_html(ctx.t("about.intro")),
        education = escape_html(ctx.t("about.education")),
        education_text = escape_html(ctx.t("about.education_text")),
        specialization = escape_html(ctx.t("about.specialization")),
        specialization_text = escape_html(ctx.t("about.specialization_text")),
        team_title = escape_html(ctx.t("team.title")),
        members = members,
    );

    render_page(ctx, ctx.t("about.title"), &body)
}
