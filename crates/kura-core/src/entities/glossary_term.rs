use serde::{Deserialize, Serialize};

/// A glossary entry; the definition is rendered HTML.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlossaryTerm {
    pub id: i64,
    pub slug: String,
    pub term: String,
    pub definition: String,
}
