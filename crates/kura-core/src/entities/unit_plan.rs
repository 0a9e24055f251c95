use serde::{Deserialize, Serialize};

/// A unit plan groups the lessons of a topic for delivery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnitPlan {
    pub id: i64,
    pub topic_id: i64,
    pub slug: String,
    pub name: String,
    pub content: String,
    pub computational_thinking_links: String,
    /// Nested heading outline of the source markdown, as JSON.
    pub heading_tree: Option<serde_json::Value>,
}

/// Insert payload for [`UnitPlan`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUnitPlan {
    pub topic_id: i64,
    pub slug: String,
    pub name: String,
    pub content: String,
    pub computational_thinking_links: String,
    pub heading_tree: Option<serde_json::Value>,
}
