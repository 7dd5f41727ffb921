use super::components::post_list;
use super::RenderContext;
use crate::content::{select_recent, PostSummary};
use crate::helpers::{html_escape, link_to};

/// Hero section: name, description, introduction and a link to the about page
pub fn hero(ctx: &RenderContext) -> String {
    let config = ctx.config;
    let more = ctx.t("home.more_about_me");

    format!(
        concat!(
            r#"<section class="hero"><div class="hero-text">"#,
            "<h1>{name}</h1>",
            r#"<p class="hero-description">{description}</p>"#,
            r#"<p class="hero-intro">{intro}</p>"#,
            "<div>{about_link}</div>",
            "</div>",
            r#"<div class="hero-wave"><span class="wave">👋</span></div>"#,
            "</section>",
        ),
        name = html_escape(config.display_title()),
        description = html_escape(&config.description),
        // Translation strings are trusted markup
        intro = ctx.t("home.intro"),
        about_link = link_to(
            config,
            "/about",
            &format!("{} &rarr;", html_escape(&more)),
            &[("class", "about-link"), ("aria-label", more.as_str())],
        ),
    )
}

/// The newest `max_display` posts under a heading
///
/// `posts` must already be in recency order.
pub fn recent_posts(ctx: &RenderContext, posts: &[PostSummary]) -> String {
    let shown = select_recent(posts, ctx.config.max_display);
    format!(
        r#"<section class="recent-posts"><h2>{}</h2>{}</section>"#,
        html_escape(&ctx.t("home.recent_posts")),
        post_list(ctx, shown, posts.len())
    )
}

/// Link to the full blog listing, present only when some posts are hidden
pub fn view_all_link(ctx: &RenderContext, total_posts: usize) -> Option<String> {
    if total_posts <= ctx.config.max_display {
        return None;
    }

    let label = ctx.t("home.view_all");
    Some(format!(
        r#"<div class="view-all">{}</div>"#,
        link_to(
            ctx.config,
            "/blog",
            &format!("{} &rarr;", html_escape(&label)),
            &[("aria-label", label.as_str())],
        )
    ))
}

/// Home page body
pub fn home(ctx: &RenderContext, posts: &[PostSummary]) -> String {
    let mut html = format!(
        r#"<div class="home">{}{}</div>"#,
        hero(ctx),
        recent_posts(ctx, posts)
    );
    if let Some(link) = view_all_link(ctx, posts.len()) {
        html.push_str(&link);
    }
    html
}
