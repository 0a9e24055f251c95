use serde::{Deserialize, Serialize};

/// A top-level curriculum topic (e.g. "Binary numbers").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Topic {
    pub id: i64,
    pub slug: String,
    pub name: String,
    /// Rendered HTML body of the topic's markdown file.
    pub content: String,
    /// Rendered HTML of the optional other-resources markdown file.
    pub other_resources: String,
    pub icon: Option<String>,
}

/// Insert payload for [`Topic`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTopic {
    pub slug: String,
    pub name: String,
    pub content: String,
    pub other_resources: String,
    pub icon: Option<String>,
}
