use serde::{Deserialize, Serialize};

/// A cross-curriculum integration activity attached to a topic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurriculumIntegration {
    pub id: i64,
    pub topic_id: i64,
    pub slug: String,
    pub number: i64,
    pub name: String,
    pub content: String,
}

/// Insert payload for [`CurriculumIntegration`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCurriculumIntegration {
    pub topic_id: i64,
    pub slug: String,
    pub number: i64,
    pub name: String,
    pub content: String,
}
