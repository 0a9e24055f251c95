//! # kura-content
//!
//! File-format handling for the content loading pipeline: Markdown
//! conversion (HTML + title + heading outline) and YAML structure files
//! with typed validation errors.
//!
//! This crate never touches the database; it turns files into values the
//! loaders in `kura-loaders` persist through `kura-db`.

pub mod error;
pub mod markdown;
pub mod structures;
pub mod yaml;

pub use error::ContentError;
pub use markdown::{HeadingNode, MarkdownDocument, convert, convert_file};
