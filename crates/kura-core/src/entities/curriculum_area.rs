use serde::{Deserialize, Serialize};

/// A curriculum area; one level of nesting via `parent_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurriculumArea {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub number: i64,
    pub colour: String,
    pub parent_id: Option<i64>,
}
