//! Small building blocks shared by the pages

use chrono::NaiveDate;

use super::RenderContext;
use crate::config::SiteConfig;
use crate::content::PostSummary;
use crate::helpers::{format_date, html_escape, link_to, tag_url, url_for};

/// Social link kinds with a bundled icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Mail,
    Github,
    Facebook,
    Youtube,
    Linkedin,
    Twitter,
}

impl SocialKind {
    pub fn name(self) -> &'static str {
        match self {
            SocialKind::Mail => "mail",
            SocialKind::Github => "github",
            SocialKind::Facebook => "facebook",
            SocialKind::Youtube => "youtube",
            SocialKind::Linkedin => "linkedin",
            SocialKind::Twitter => "twitter",
        }
    }

    fn icon_path(self) -> String {
        format!("/static/icons/social/{}.svg", self.name())
    }
}

/// Clickable social icon, or nothing when there is no destination
pub fn social_icon(config: &SiteConfig, kind: SocialKind, href: &str, size: u8) -> Option<String> {
    if href.is_empty() {
        return None;
    }
    if kind == SocialKind::Mail {
        let address = href.strip_prefix("mailto:").unwrap_or(href);
        if !address.contains('@') {
            return None;
        }
    }

    let icon = format!(
        r#"<span class="sr-only">{}</span><img src="{}" alt="" class="social-icon h-{} w-{}">"#,
        kind.name(),
        html_escape(&url_for(config, &kind.icon_path())),
        size,
        size
    );
    Some(link_to(config, href, &icon, &[("class", "social-link")]))
}

/// Tag pill linking to the tag listing
pub fn tag(config: &SiteConfig, text: &str) -> String {
    let label = text.split(' ').collect::<Vec<_>>().join("-");
    link_to(
        config,
        &tag_url(config, text),
        &html_escape(&label),
        &[("class", "tag")],
    )
}

/// `<time>` element carrying the ISO date and the localized display form
pub fn time_tag(date: &NaiveDate, locale: &str) -> String {
    format!(
        r#"<time datetime="{}">{}</time>"#,
        date.format("%Y-%m-%d"),
        html_escape(&format_date(date, locale))
    )
}

/// One post summary as a list item
pub fn post_item(ctx: &RenderContext, post: &PostSummary) -> String {
    let config = ctx.config;
    let path = post.path();
    let title = html_escape(&post.title);
    let tags: String = post.tags.iter().map(|t| tag(config, t)).collect();
    let read_label = format!("{} \"{}\"", ctx.t("home.read_more"), post.title);

    format!(
        concat!(
            r#"<li class="post-item"><article>"#,
            r#"<dl><dt class="sr-only">{published}</dt><dd class="post-date">{time}</dd></dl>"#,
            r#"<div class="post-body">"#,
            r#"<h2 class="post-title">{title_link}</h2>"#,
            r#"<div class="post-tags">{tags}</div>"#,
            r#"<div class="post-summary">{summary}</div>"#,
            r#"<div class="post-more">{more_link}</div>"#,
            r#"</div></article></li>"#,
        ),
        published = html_escape(&ctx.t("home.published")),
        time = time_tag(&post.date, &config.locale),
        title_link = link_to(config, &path, &title, &[]),
        tags = tags,
        summary = html_escape(&post.summary),
        more_link = link_to(
            config,
            &path,
            &format!("{} &rarr;", html_escape(&ctx.t("home.read_more"))),
            &[("aria-label", read_label.as_str())],
        ),
    )
}

/// List of the `shown` posts
///
/// `total` is the size of the list `shown` was cut from; the no-posts
/// placeholder appears only when that is zero.
pub fn post_list(ctx: &RenderContext, shown: &[PostSummary], total: usize) -> String {
    let mut html = String::from(r#"<ul class="post-list">"#);
    if total == 0 {
        html.push_str(&html_escape(&ctx.t("home.no_posts")));
    }
    for post in shown {
        html.push_str(&post_item(ctx, post));
    }
    html.push_str("</ul>");
    html
}
