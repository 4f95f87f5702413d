//! Content module - post records, front-matter, and document loading

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::{FrontMatter, MetaValue};
pub use loader::{ContentLoader, LoadError};
pub use markdown::MarkdownRenderer;
pub use post::{Document, Post};
