use serde::{Deserialize, Serialize};

/// A physical classroom resource a lesson calls for (scissors, dice, …).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassroomResource {
    pub id: i64,
    pub slug: String,
    pub description: String,
}
