//! HTML helper functions

use super::url::{is_external, url_for};
use crate::config::SiteConfig;

/// Generate a CSS link tag
///
/// # Examples
/// ```ignore
/// css(&config, "style") // -> <link rel="stylesheet" href="/static/css/style.css">
/// ```
pub fn css(config: &SiteConfig, path: &str) -> String {
    let href = if is_external(path) {
        path.to_string()
    } else {
        let path = if path.ends_with(".css") {
            path.to_string()
        } else {
            format!("{}.css", path)
        };
        url_for(config, &format!("static/css/{}", path.trim_start_matches('/')))
    };

    format!(r#"<link rel="stylesheet" href="{}">"#, html_escape(&href))
}

/// Generate an anchor tag
///
/// `text` is trusted markup; escape it first when it comes from content.
/// External links open in a new tab.
///
/// # Examples
/// ```ignore
/// link_to(&config, "/about", "About", &[("class", "nav-link")])
/// // -> <a href="/about" class="nav-link">About</a>
/// ```
pub fn link_to(config: &SiteConfig, path: &str, text: &str, attrs: &[(&str, &str)]) -> String {
    let href = url_for(config, path);
    let mut html = format!(r#"<a href="{}""#, html_escape(&href));

    for (name, value) in attrs {
        html.push_str(&format!(r#" {}="{}""#, name, html_escape(value)));
    }

    if path.starts_with("http://") || path.starts_with("https://") {
        html.push_str(r#" target="_blank" rel="noopener noreferrer""#);
    }

    html.push('>');
    html.push_str(text);
    html.push_str("</a>");
    html
}

/// Generate an image tag
pub fn image_tag(config: &SiteConfig, path: &str, alt: &str, class: Option<&str>) -> String {
    let src = url_for(config, path);
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();

    format!(
        r#"<img src="{}" alt="{}"{}>"#,
        html_escape(&src),
        html_escape(alt),
        class_attr
    )
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="folio {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
