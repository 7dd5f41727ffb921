use super::footer::footer;
use super::RenderContext;
use crate::helpers::{css, html_escape, link_to, meta_generator};

/// Per-page head data
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Site header with the navigation links in configured order
pub fn header(ctx: &RenderContext) -> String {
    let config = ctx.config;
    let links: String = config
        .nav
        .iter()
        .map(|item| {
            let key = format!("nav.{}", item.name);
            let label = match ctx.t(&key) {
                translated if translated == key => item.name.clone(),
                translated => translated,
            };
            link_to(config, &item.path, &html_escape(&label), &[("class", "nav-link")])
        })
        .collect();

    format!(
        r#"<header class="site-header">{}<nav>{}</nav></header>"#,
        link_to(
            config,
            "/",
            &html_escape(&config.title),
            &[("class", "site-title"), ("aria-label", config.title.as_str())],
        ),
        links
    )
}

/// Wrap a page body in the document shell
pub fn layout(ctx: &RenderContext, meta: &PageMeta, body: &str) -> String {
    let config = ctx.config;
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="{lang}">"#,
            "<head>",
            r#"<meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title>",
            r#"<meta name="description" content="{description}">"#,
            "{generator}{stylesheet}",
            "</head>",
            r#"<body><div class="container">{header}<main>{body}</main>{footer}</div></body>"#,
            "</html>\n",
        ),
        lang = html_escape(&config.language),
        title = html_escape(&meta.title),
        description = html_escape(&meta.description),
        generator = meta_generator(),
        stylesheet = css(config, "style"),
        header = header(ctx),
        body = body,
        footer = footer(ctx),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavLink;
    use crate::i18n::I18n;
    use crate::templates::test_support::config;

    #[test]
    fn test_header_translates_known_nav_names() {
        let mut config = config();
        config.nav.push(NavLink {
            name: "Uses".to_string(),
            path: "/uses".to_string(),
        });
        let i18n = I18n::new("pl");
        let ctx = RenderContext::new(&config, &i18n, 2024);

        let html = header(&ctx);
        assert!(html.contains(r#"<a href="/projects" class="nav-link">Projekty</a>"#));
        assert!(html.contains(r#"<a href="/uses" class="nav-link">Uses</a>"#));
        assert!(html.find("/blog").unwrap() < html.find("/about").unwrap());
    }

    #[test]
    fn test_layout_shell() {
        let config = config();
        let i18n = I18n::new("en");
        let ctx = RenderContext::new(&config, &i18n, 2024);

        let html = layout(&ctx, &PageMeta::new("About • Jane", "About me"), "<p>body</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>About • Jane</title>"));
        assert!(html.contains("<main><p>body</p></main>"));
        assert!(html.contains(r#"<footer class="site-footer">"#));
        assert!(html.contains("/static/css/style.css"));
    }
}
