//! Content loader - reads the post index and author profile from the content directory

use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ContentError, Result};
use super::post::{sort_by_recency, PostRecord, PostSummary};
use super::AuthorProfile;
use crate::Site;

/// Loads already-parsed content records from the content directory
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load published post summaries in recency order
    pub fn load_posts(&self) -> Result<Vec<PostSummary>> {
        let Some(index) = self.post_index_path() else {
            tracing::debug!("No post index in {:?}", self.site.content_dir);
            return Ok(Vec::new());
        };

        let records: Vec<PostRecord> = read_records(&index)?;
        let total = records.len();

        let mut seen = HashSet::new();
        let mut posts = Vec::with_capacity(total);
        for record in records {
            if !seen.insert(record.slug.clone()) {
                return Err(ContentError::DuplicateSlug(record.slug));
            }
            let post = PostSummary::try_from(record)?;
            if post.draft && !self.site.config.render_drafts {
                tracing::debug!("Skipping draft: {}", post.slug);
                continue;
            }
            posts.push(post);
        }

        sort_by_recency(&mut posts);
        tracing::debug!("Loaded {} of {} posts from {:?}", posts.len(), total, index);

        Ok(posts)
    }

    /// Load the author profile, falling back to the site metadata
    pub fn load_author(&self) -> Result<AuthorProfile> {
        let path = self.site.content_dir.join("author.yml");
        if !path.exists() {
            return Ok(AuthorProfile::from_config(&self.site.config));
        }

        let profile: AuthorProfile = read_records(&path)?;
        Ok(profile.with_fallbacks(&self.site.config))
    }

    /// `posts.yml`, `posts.yaml` or `posts.json`, in that order of preference
    fn post_index_path(&self) -> Option<PathBuf> {
        ["posts.yml", "posts.yaml", "posts.json"]
            .iter()
            .map(|name| self.site.content_dir.join(name))
            .find(|path| path.is_file())
    }
}

/// Read a YAML or JSON file, picking the parser by extension
pub(crate) fn read_records<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        serde_json::from_str(&content).map_err(|source| ContentError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_yaml::from_str(&content).map_err(|source| ContentError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}
