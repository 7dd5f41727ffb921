use super::components::post_list;
use super::RenderContext;
use crate::content::{tag_counts, PostSummary};
use crate::helpers::{html_escape, link_to, tag_url};

/// Full post listing
pub fn blog(ctx: &RenderContext, posts: &[PostSummary]) -> String {
    format!(
        r#"<div class="blog"><h1>{}</h1>{}</div>"#,
        html_escape(&ctx.t("blog.heading")),
        post_list(ctx, posts, posts.len())
    )
}

/// Every tag with its post count
pub fn tags_index(ctx: &RenderContext, posts: &[PostSummary]) -> String {
    let items: String = tag_counts(posts)
        .into_iter()
        .map(|(tag, count)| {
            format!(
                r#"<li class="tag-index-item">{}<span class="tag-count">{}</span></li>"#,
                link_to(
                    ctx.config,
                    &tag_url(ctx.config, &tag),
                    &html_escape(&tag),
                    &[("class", "tag")],
                ),
                html_escape(&ctx.i18n.get_plural("tags.count", count))
            )
        })
        .collect();

    format!(
        r#"<div class="tags"><h1>{}</h1><ul class="tag-index">{}</ul></div>"#,
        html_escape(&ctx.t("tags.heading")),
        items
    )
}

/// Posts carrying one tag
pub fn tag_page(ctx: &RenderContext, tag: &str, posts: &[PostSummary]) -> String {
    format!(
        r#"<div class="tag-page"><h1>{}: {}</h1>{}</div>"#,
        html_escape(&ctx.t("tags.tagged")),
        html_escape(tag),
        post_list(ctx, posts, posts.len())
    )
}

/// Not-found page body
pub fn not_found(ctx: &RenderContext) -> String {
    format!(
        concat!(
            r#"<div class="not-found"><h1>{heading}</h1>"#,
            "<p>{message}</p>",
            "{home_link}</div>",
        ),
        heading = html_escape(&ctx.t("not_found.heading")),
        message = html_escape(&ctx.t("not_found.message")),
        home_link = link_to(
            ctx.config,
            "/",
            &html_escape(&ctx.t("not_found.back_home")),
            &[("class", "home-link")],
        ),
    )
}
