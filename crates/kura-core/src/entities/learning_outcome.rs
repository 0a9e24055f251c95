use serde::{Deserialize, Serialize};

/// A learning outcome lessons and challenges can be tagged with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LearningOutcome {
    pub id: i64,
    pub slug: String,
    pub text: String,
}
