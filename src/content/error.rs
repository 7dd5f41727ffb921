//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("post '{slug}' has an unrecognised date: {date}")]
    InvalidDate { slug: String, date: String },

    #[error("duplicate post slug: {0}")]
    DuplicateSlug(String),
}

pub type Result<T> = std::result::Result<T, ContentError>;
