//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration: the site metadata record plus build settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Identity
    pub title: String,
    pub author: String,
    pub header_title: String,
    pub description: String,
    pub language: String,
    pub locale: String,
    pub site_url: String,
    pub site_repo: String,
    pub site_logo: String,
    pub image: String,
    pub social_banner: String,

    // Contact
    pub email: String,
    pub github: String,
    pub facebook: String,
    pub youtube: String,
    pub linkedin: String,
    pub twitter: String,

    // Integrations
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub comments: CommentsConfig,

    // Build
    pub root: String,
    pub content_dir: String,
    pub static_dir: String,
    pub public_dir: String,
    pub language_dir: String,
    pub max_display: usize,
    pub render_drafts: bool,
    pub nav: Vec<NavLink>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            author: "John Doe".to_string(),
            header_title: String::new(),
            description: String::new(),
            language: "en".to_string(),
            locale: "en-US".to_string(),
            site_url: "http://example.com".to_string(),
            site_repo: String::new(),
            site_logo: String::new(),
            image: String::new(),
            social_banner: String::new(),

            email: String::new(),
            github: String::new(),
            facebook: String::new(),
            youtube: String::new(),
            linkedin: String::new(),
            twitter: String::new(),

            analytics: AnalyticsConfig::default(),
            comments: CommentsConfig::default(),

            root: "/".to_string(),
            content_dir: "content".to_string(),
            static_dir: "static".to_string(),
            public_dir: "public".to_string(),
            language_dir: "languages".to_string(),
            max_display: 3,
            render_drafts: false,
            nav: NavLink::defaults(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config: SiteConfig = serde_yaml::from_str(&content)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Overlay the giscus identifiers from the environment.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a closure.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let giscus = &mut self.comments.giscus;
        let targets: [(&str, &mut String); 4] = [
            ("FOLIO_GISCUS_REPO", &mut giscus.repo),
            ("FOLIO_GISCUS_REPOSITORY_ID", &mut giscus.repository_id),
            ("FOLIO_GISCUS_CATEGORY", &mut giscus.category),
            ("FOLIO_GISCUS_CATEGORY_ID", &mut giscus.category_id),
        ];

        for (key, field) in targets {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                tracing::debug!("Using {} from environment", key);
                *field = value;
            }
        }
    }

    /// Title shown in the hero and header, falling back to the author name
    pub fn display_title(&self) -> &str {
        if self.header_title.is_empty() {
            &self.author
        } else {
            &self.header_title
        }
    }
}

/// A header navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// i18n key or literal label
    pub name: String,
    pub path: String,
}

impl NavLink {
    fn defaults() -> Vec<Self> {
        [("blog", "/blog"), ("projects", "/projects"), ("about", "/about")]
            .into_iter()
            .map(|(name, path)| NavLink {
                name: name.to_string(),
                path: path.to_string(),
            })
            .collect()
    }
}

/// Analytics keys
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub plausible_data_domain: String,
    pub google_analytics_id: String,
}

/// Comment provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    pub provider: String,
    #[serde(default)]
    pub giscus: GiscusConfig,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            provider: "giscus".to_string(),
            giscus: GiscusConfig::default(),
        }
    }
}

/// Giscus configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GiscusConfig {
    pub repo: String,
    pub repository_id: String,
    pub category: String,
    pub category_id: String,
    pub mapping: String,
    pub reactions: String,
    pub metadata: String,
    pub theme: String,
    pub dark_theme: String,
    pub theme_url: String,
    pub lang: String,
}

impl Default for GiscusConfig {
    fn default() -> Self {
        Self {
            repo: String::new(),
            repository_id: String::new(),
            category: String::new(),
            category_id: String::new(),
            mapping: "pathname".to_string(),
            reactions: "1".to_string(),
            metadata: "0".to_string(),
            theme: "light".to_string(),
            dark_theme: "transparent_dark".to_string(),
            theme_url: String::new(),
            lang: "en".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.max_display, 3);
        assert_eq!(config.nav.len(), 3);
        assert_eq!(config.nav[0].path, "/blog");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Marcin Parda
author: Marcin Parda
description: Develop your programming skills with me.
language: pl
github: https://github.com/MarcinParda
analytics:
  google_analytics_id: G-TEST
comments:
  giscus:
    lang: pl
custom_key: 42
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Marcin Parda");
        assert_eq!(config.language, "pl");
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.analytics.google_analytics_id, "G-TEST");
        assert_eq!(config.comments.provider, "giscus");
        assert_eq!(config.comments.giscus.lang, "pl");
        assert_eq!(config.comments.giscus.mapping, "pathname");
        assert!(config.extra.contains_key("custom_key"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = SiteConfig::default();
        config.comments.giscus.repo = "from/file".to_string();
        config.comments.giscus.category = "Comments".to_string();

        config.apply_env_overrides(|key| match key {
            "FOLIO_GISCUS_REPO" => Some("from/env".to_string()),
            "FOLIO_GISCUS_CATEGORY" => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.comments.giscus.repo, "from/env");
        assert_eq!(config.comments.giscus.category, "Comments");
        assert_eq!(config.comments.giscus.repository_id, "");
    }

    #[test]
    fn test_display_title() {
        let mut config = SiteConfig::default();
        config.author = "Jane".to_string();
        assert_eq!(config.display_title(), "Jane");
        config.header_title = "Jane's notes".to_string();
        assert_eq!(config.display_title(), "Jane's notes");
    }
}
