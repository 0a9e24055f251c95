use serde::{Deserialize, Serialize};

/// Difficulty rating shared by programming challenges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChallengeDifficulty {
    pub id: i64,
    pub level: i64,
    pub name: String,
}

/// A programming language challenges can be implemented in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChallengeLanguage {
    pub id: i64,
    pub slug: String,
    pub name: String,
    /// Display ordering across languages.
    pub number: i64,
    pub icon: Option<String>,
}

/// A programming challenge attached to a topic.
///
/// `set_number`/`number` are the challenge's default numbering; lessons that
/// reference a challenge carry their own numbering in the join table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgrammingChallenge {
    pub id: i64,
    pub topic_id: i64,
    pub slug: String,
    pub name: String,
    pub set_number: i64,
    pub number: i64,
    pub content: String,
    pub extra_challenge: String,
    pub difficulty_id: i64,
}

/// Insert payload for [`ProgrammingChallenge`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewChallenge {
    pub topic_id: i64,
    pub slug: String,
    pub name: String,
    pub set_number: i64,
    pub number: i64,
    pub content: String,
    pub extra_challenge: String,
    pub difficulty_id: i64,
}

/// One language's rendition of a challenge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChallengeImplementation {
    pub id: i64,
    pub challenge_id: i64,
    pub language_id: i64,
    pub expected_result: String,
    pub hints: String,
    pub solution: String,
}

/// Insert payload for [`ChallengeImplementation`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewChallengeImplementation {
    pub challenge_id: i64,
    pub language_id: i64,
    pub expected_result: String,
    pub hints: String,
    pub solution: String,
}
