use serde::{Deserialize, Serialize};

/// A single lesson within a unit plan.
///
/// Lessons carry most of the cross-references in the model: age groups
/// (through lesson numbers), learning outcomes, classroom resources,
/// generated resources, and programming challenges are all linked through
/// join tables in `kura-db`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lesson {
    pub id: i64,
    pub topic_id: i64,
    pub unit_plan_id: i64,
    pub slug: String,
    pub name: String,
    /// Duration in minutes, when the structure file provides one.
    pub duration: Option<i64>,
    pub content: String,
    pub computational_thinking_links: String,
    pub programming_challenges_description: String,
    pub heading_tree: Option<serde_json::Value>,
}

/// Insert payload for [`Lesson`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewLesson {
    pub topic_id: i64,
    pub unit_plan_id: i64,
    pub slug: String,
    pub name: String,
    pub duration: Option<i64>,
    pub content: String,
    pub computational_thinking_links: String,
    pub programming_challenges_description: String,
    pub heading_tree: Option<serde_json::Value>,
}
