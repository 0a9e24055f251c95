use serde::{Deserialize, Serialize};

/// A printable resource record.
///
/// `generator` names the registered generator that produces the pages;
/// `copies` marks resources generated once per student rather than per
/// class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub generator: String,
    /// Thumbnail path relative to the static directory.
    pub thumbnail: String,
    pub copies: bool,
}
