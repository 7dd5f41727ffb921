//! Post summary model

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::collections::{HashMap, HashSet};

use super::date::parse_date_string;
use super::error::{ContentError, Result};

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> std::result::Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// A post summary as it appears in the content index
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    pub slug: String,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub draft: bool,
}

/// Metadata-only view of a blog post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    /// URL segment, unique across the site
    pub slug: String,
    pub title: String,
    pub date: NaiveDate,
    pub summary: String,
    pub tags: Vec<String>,
    pub draft: bool,
}

impl PostSummary {
    /// Create a published post with no summary or tags
    pub fn new(slug: &str, title: &str, date: NaiveDate) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            date,
            summary: String::new(),
            tags: Vec::new(),
            draft: false,
        }
    }

    /// Site-relative path of the full article
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    /// ISO date used for `<time datetime>`
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl TryFrom<PostRecord> for PostSummary {
    type Error = ContentError;

    fn try_from(record: PostRecord) -> Result<Self> {
        let date = parse_date_string(&record.date).ok_or_else(|| ContentError::InvalidDate {
            slug: record.slug.clone(),
            date: record.date.clone(),
        })?;

        Ok(Self {
            slug: record.slug,
            title: record.title,
            date,
            summary: record.summary,
            tags: record.tags,
            draft: record.draft,
        })
    }
}

/// Stable sort into recency order (newest first)
pub fn sort_by_recency(posts: &mut [PostSummary]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}

/// The first `max` posts of an already recency-ordered list
pub fn select_recent(posts: &[PostSummary], max: usize) -> &[PostSummary] {
    &posts[..posts.len().min(max)]
}

/// URL segment for a tag
///
/// Tags with no sluggable characters (`++`, `#`) get `tag-` followed by the
/// hex of their bytes, so every tag has its own non-empty segment.
pub fn tag_slug(tag: &str) -> String {
    let slug = slug::slugify(tag);
    if !slug.is_empty() {
        return slug;
    }
    let hex: String = tag.bytes().map(|b| format!("{:02x}", b)).collect();
    format!("tag-{}", hex)
}

/// Tag usage counts, most used first, ties broken by name
///
/// Tags are grouped by [`tag_slug`], so "Next.js" and "next-js" are one tag
/// shown under the first spelling met in `posts`. A post counts once per tag.
pub fn tag_counts(posts: &[PostSummary]) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, (&str, usize)> = HashMap::new();
    for post in posts {
        let mut seen = HashSet::new();
        for tag in &post.tags {
            let slug = tag_slug(tag);
            if !seen.insert(slug.clone()) {
                continue;
            }
            counts.entry(slug).or_insert((tag.as_str(), 0)).1 += 1;
        }
    }

    let mut counts: Vec<_> = counts
        .into_values()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Posts carrying a tag, compared by slug so "Next.js" and "next-js" match
pub fn posts_tagged<'a>(posts: &'a [PostSummary], slug: &str) -> Vec<&'a PostSummary> {
    posts
        .iter()
        .filter(|p| p.tags.iter().any(|t| tag_slug(t) == slug))
        .collect()
}
