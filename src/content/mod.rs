//! Content module - post summaries and the author profile supplied by the content layer

mod author;
mod date;
mod error;
pub mod loader;
mod post;

pub use author::AuthorProfile;
pub use date::parse_date_string;
pub use error::ContentError;
pub use post::{
    posts_tagged, select_recent, sort_by_recency, tag_counts, tag_slug, PostRecord, PostSummary,
};
