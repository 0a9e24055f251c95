//! Markdown conversion.
//!
//! Content markdown is converted once at load time: the rendered HTML is
//! stored on the record, the first heading becomes the record name, and the
//! full heading outline is kept as a nested tree for unit plans and lessons.

use std::path::Path;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};
use serde::{Deserialize, Serialize};

use kura_core::slug::slugify;

use crate::error::ContentError;
use crate::yaml::read_file;

/// One heading in the outline of a markdown file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeadingNode {
    pub title: String,
    pub slug: String,
    pub level: u8,
    pub children: Vec<HeadingNode>,
}

/// A converted markdown file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownDocument {
    /// Text of the first heading in the file.
    pub title: String,
    /// Rendered HTML of the whole file.
    pub html: String,
    /// Nested heading outline.
    pub heading_tree: Vec<HeadingNode>,
}

impl MarkdownDocument {
    /// The heading tree as a JSON value, for storage.
    #[must_use]
    pub fn heading_tree_value(&self) -> serde_json::Value {
        serde_json::to_value(&self.heading_tree).unwrap_or(serde_json::Value::Null)
    }
}

/// Read and convert a markdown file.
///
/// # Errors
///
/// Returns `ContentError::MissingFile`/`Io` for file problems and
/// `ContentError::NoHeading` if the file contains no heading.
pub fn convert_file(path: &Path) -> Result<MarkdownDocument, ContentError> {
    let source = read_file(path)?;
    convert(&source).ok_or_else(|| ContentError::NoHeading {
        path: path.to_path_buf(),
    })
}

/// Convert markdown source. Returns `None` when the source has no heading.
#[must_use]
pub fn convert(source: &str) -> Option<MarkdownDocument> {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let events: Vec<Event<'_>> = Parser::new_ext(source, options).collect();

    let headings = collect_headings(&events);
    let title = headings.first()?.1.clone();

    let mut out = String::with_capacity(source.len() * 2);
    html::push_html(&mut out, events.iter().cloned());

    let mut pos = 0;
    let heading_tree = build_tree(&headings, &mut pos, 1);

    Some(MarkdownDocument {
        title,
        html: out,
        heading_tree,
    })
}

/// Flatten heading events into `(level, text)` pairs, in document order.
fn collect_headings(events: &[Event<'_>]) -> Vec<(u8, String)> {
    let mut headings = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in events {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((heading_level(*level), String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = current.take() {
                    headings.push(heading);
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buffer)) = current.as_mut() {
                    buffer.push_str(text);
                }
            }
            _ => {}
        }
    }

    headings
}

const fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Nest a flat heading list: a heading owns every following heading with a
/// strictly greater level, until a peer or shallower heading appears.
fn build_tree(flat: &[(u8, String)], pos: &mut usize, min_level: u8) -> Vec<HeadingNode> {
    let mut nodes = Vec::new();
    while *pos < flat.len() {
        let (level, ref title) = flat[*pos];
        if level < min_level {
            break;
        }
        *pos += 1;
        let children = build_tree(flat, pos, level + 1);
        nodes.push(HeadingNode {
            title: title.clone(),
            slug: slugify(title),
            level,
            children,
        });
    }
    nodes
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::convert;

    const LESSON: &str = "\
# Introducing binary

Some **introductory** text.

## Key questions

- What is a bit?

## Lesson starter

Count with `fingers`.

### Equipment

Cards.
";

    #[test]
    fn title_is_first_heading() {
        let doc = convert(LESSON).expect("should convert");
        assert_eq!(doc.title, "Introducing binary");
    }

    #[test]
    fn html_renders_blocks() {
        let doc = convert(LESSON).expect("should convert");
        assert!(doc.html.contains("<h1>Introducing binary</h1>"));
        assert!(doc.html.contains("<strong>introductory</strong>"));
        assert!(doc.html.contains("<li>What is a bit?</li>"));
        assert!(doc.html.contains("<code>fingers</code>"));
    }

    #[test]
    fn heading_tree_nests_by_level() {
        let doc = convert(LESSON).expect("should convert");
        assert_eq!(doc.heading_tree.len(), 1);

        let root = &doc.heading_tree[0];
        assert_eq!(root.slug, "introducing-binary");
        assert_eq!(root.level, 1);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].title, "Key questions");
        assert_eq!(root.children[1].title, "Lesson starter");
        assert_eq!(root.children[1].children[0].title, "Equipment");
        assert_eq!(root.children[1].children[0].level, 3);
    }

    #[test]
    fn no_heading_returns_none() {
        assert!(convert("just a paragraph\n").is_none());
        assert!(convert("").is_none());
    }

    #[test]
    fn skipped_levels_still_nest() {
        let doc = convert("# Top\n\n### Deep\n").expect("should convert");
        assert_eq!(doc.heading_tree[0].children.len(), 1);
        assert_eq!(doc.heading_tree[0].children[0].level, 3);
    }

    #[test]
    fn heading_with_inline_code_keeps_text() {
        let doc = convert("# Using `print`\n").expect("should convert");
        assert_eq!(doc.title, "Using print");
        assert_eq!(doc.heading_tree[0].slug, "using-print");
    }

    #[test]
    fn heading_tree_value_is_json_array() {
        let doc = convert("# A\n## B\n").expect("should convert");
        let value = doc.heading_tree_value();
        assert!(value.is_array());
        assert_eq!(value[0]["children"][0]["title"], "B");
    }
}
