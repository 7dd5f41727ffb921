use super::components::{social_icon, SocialKind};
use super::RenderContext;
use crate::helpers::html_escape;

/// Site footer: social icons, author and copyright year
pub fn footer(ctx: &RenderContext) -> String {
    let config = ctx.config;
    let mail = if config.email.is_empty() {
        String::new()
    } else {
        format!("mailto:{}", config.email)
    };

    let icons: String = [
        (SocialKind::Mail, mail.as_str()),
        (SocialKind::Github, config.github.as_str()),
        (SocialKind::Facebook, config.facebook.as_str()),
        (SocialKind::Youtube, config.youtube.as_str()),
        (SocialKind::Linkedin, config.linkedin.as_str()),
        (SocialKind::Twitter, config.twitter.as_str()),
    ]
    .into_iter()
    .filter_map(|(kind, href)| social_icon(config, kind, href, 6))
    .collect();

    format!(
        concat!(
            r#"<footer class="site-footer">"#,
            r#"<div class="footer-icons">{icons}</div>"#,
            r#"<div class="footer-meta"><div>{author}</div><div> • </div><div>© {year}</div></div>"#,
            "</footer>",
        ),
        icons = icons,
        author = html_escape(&config.author),
        year = ctx.year,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;
    use crate::templates::test_support::config;

    #[test]
    fn test_footer_renders_configured_links_in_order() {
        let mut config = config();
        config.twitter = "https://twitter.com/jane".to_string();
        let i18n = I18n::new("en");
        let ctx = RenderContext::new(&config, &i18n, 2026);

        let html = footer(&ctx);
        let mail = html.find("mailto:jane@example.com").unwrap();
        let github = html.find("https://github.com/jane").unwrap();
        let twitter = html.find("https://twitter.com/jane").unwrap();
        assert!(mail < github && github < twitter);
        assert_eq!(html.matches(r#"class="social-link""#).count(), 3);
        assert!(html.contains("<div>Jane Doe</div>"));
        assert!(html.contains("© 2026"));
    }

    #[test]
    fn test_footer_without_links() {
        let mut config = config();
        config.email.clear();
        config.github.clear();
        let i18n = I18n::new("en");
        let ctx = RenderContext::new(&config, &i18n, 2026);

        assert!(!footer(&ctx).contains("social-link"));
    }
}
