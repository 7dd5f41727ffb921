//! Helper functions for templates
//!
//! URL generation, HTML tag builders and date formatting shared by every
//! page renderer.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
