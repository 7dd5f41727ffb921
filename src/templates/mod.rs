//! Page renderers
//!
//! Every renderer is a pure function from records to markup. List renderers
//! produce one node per record, in record order, and the page functions
//! join them. Nothing here touches the filesystem or fails.

mod about;
mod blog;
mod components;
mod footer;
mod home;
mod layout;
mod projects;

pub use about::{about, job_items, skill_items};
pub use blog::{blog, not_found, tag_page, tags_index};
pub use components::{post_item, post_list, social_icon, tag, time_tag, SocialKind};
pub use footer::footer;
pub use home::{hero, home, recent_posts, view_all_link};
pub use layout::{header, layout, PageMeta};
pub use projects::{project_cards, projects};

use crate::config::SiteConfig;
use crate::i18n::I18n;

/// Everything a renderer may read besides its records
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    pub i18n: &'a I18n,
    /// Year printed in the footer copyright
    pub year: i32,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a SiteConfig, i18n: &'a I18n, year: i32) -> Self {
        Self { config, i18n, year }
    }

    /// Translated UI string
    pub fn t(&self, key: &str) -> String {
        self.i18n.get(key)
    }
}

/// Concatenate rendered nodes
pub fn join(nodes: Vec<String>) -> String {
    nodes.concat()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::content::PostSummary;
    use chrono::NaiveDate;

    pub fn config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.title = "Test Site".to_string();
        config.author = "Jane Doe".to_string();
        config.description = "Notes on building things.".to_string();
        config.email = "jane@example.com".to_string();
        config.github = "https://github.com/jane".to_string();
        config
    }

    pub fn posts(count: u32) -> Vec<PostSummary> {
        (1..=count)
            .rev()
            .map(|day| {
                let mut post = PostSummary::new(
                    &format!("post-{}", day),
                    &format!("Post {}", day),
                    NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                );
                post.summary = format!("Summary {}", day);
                post.tags = vec!["Rust".to_string()];
                post
            })
            .collect()
    }
}
