//! URL helper functions

use crate::config::SiteConfig;
use crate::content::tag_slug;

/// Generate a URL with the root path
///
/// External URLs (`http(s)://`, `mailto:`, `//`) and in-page anchors are
/// returned unchanged.
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog") // -> "/portfolio/blog"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) || path.starts_with('#') {
        return path.to_string();
    }

    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Listing page for a tag
pub fn tag_url(config: &SiteConfig, tag: &str) -> String {
    url_for(config, &format!("tags/{}", tag_slug(tag)))
}

/// Whether a link leaves the site
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("mailto:")
        || path.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = "/portfolio/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/blog"), "/portfolio/blog");
        assert_eq!(url_for(&config, "about"), "/portfolio/about");
        assert_eq!(url_for(&config, "/"), "/portfolio/");
        assert_eq!(url_for(&config, "https://github.com/x"), "https://github.com/x");
        assert_eq!(url_for(&config, "mailto:a@b.c"), "mailto:a@b.c");
    }

    #[test]
    fn test_url_for_default_root() {
        let config = SiteConfig::default();
        assert_eq!(url_for(&config, "/blog/hello"), "/blog/hello");
        assert_eq!(url_for(&config, ""), "/");
    }

    #[test]
    fn test_tag_url() {
        let config = SiteConfig::default();
        assert_eq!(tag_url(&config, "Next.js"), "/tags/next-js");
        assert_eq!(tag_url(&config, "web dev"), "/tags/web-dev");
        assert_eq!(tag_url(&config, "++"), "/tags/tag-2b2b");
    }
}
