use serde::{Deserialize, Serialize};

/// An age bracket lessons are written for (e.g. ages 5–7).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgeGroup {
    pub id: i64,
    pub slug: String,
    pub min_age: i64,
    pub max_age: i64,
    pub description: String,
}
