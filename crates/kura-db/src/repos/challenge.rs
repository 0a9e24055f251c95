//! Programming challenge repository: difficulties, languages, challenges,
//! and per-language implementations.

use kura_core::entities::{
    ChallengeDifficulty, ChallengeImplementation, ChallengeLanguage, NewChallenge,
    NewChallengeImplementation, ProgrammingChallenge,
};

use crate::KuraDb;
use crate::error::DatabaseError;
use crate::helpers::get_opt_string;

const CHALLENGE_COLS: &str =
    "id, topic_id, slug, name, set_number, number, content, extra_challenge, difficulty_id";

fn row_to_challenge(row: &libsql::Row) -> Result<ProgrammingChallenge, DatabaseError> {
    Ok(ProgrammingChallenge {
        id: row.get(0)?,
        topic_id: row.get(1)?,
        slug: row.get(2)?,
        name: row.get(3)?,
        set_number: row.get(4)?,
        number: row.get(5)?,
        content: row.get(6)?,
        extra_challenge: row.get(7)?,
        difficulty_id: row.get(8)?,
    })
}

impl KuraDb {
    pub async fn insert_challenge_difficulty(
        &self,
        level: i64,
        name: &str,
    ) -> Result<ChallengeDifficulty, DatabaseError> {
        let id = self
            .insert_returning_id(
                "INSERT INTO challenge_difficulties (level, name) VALUES (?1, ?2) RETURNING id",
                libsql::params![level, name],
            )
            .await?;

        Ok(ChallengeDifficulty {
            id,
            level,
            name: name.to_string(),
        })
    }

    pub async fn get_challenge_difficulty(
        &self,
        level: i64,
    ) -> Result<ChallengeDifficulty, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, level, name FROM challenge_difficulties WHERE level = ?1",
                libsql::params![level],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(ChallengeDifficulty {
            id: row.get(0)?,
            level: row.get(1)?,
            name: row.get(2)?,
        })
    }

    pub async fn insert_challenge_language(
        &self,
        slug: &str,
        name: &str,
        number: i64,
        icon: Option<&str>,
    ) -> Result<ChallengeLanguage, DatabaseError> {
        let id = self
            .insert_returning_id(
                "INSERT INTO challenge_languages (slug, name, number, icon)
                 VALUES (?1, ?2, ?3, ?4) RETURNING id",
                libsql::params![slug, name, number, icon],
            )
            .await?;

        Ok(ChallengeLanguage {
            id,
            slug: slug.to_string(),
            name: name.to_string(),
            number,
            icon: icon.map(String::from),
        })
    }

    pub async fn get_challenge_language(
        &self,
        slug: &str,
    ) -> Result<ChallengeLanguage, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, slug, name, number, icon FROM challenge_languages WHERE slug = ?1",
                [slug],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(ChallengeLanguage {
            id: row.get(0)?,
            slug: row.get(1)?,
            name: row.get(2)?,
            number: row.get(3)?,
            icon: get_opt_string(&row, 4)?,
        })
    }

    pub async fn insert_challenge(
        &self,
        new: &NewChallenge,
    ) -> Result<ProgrammingChallenge, DatabaseError> {
        let id = self
            .insert_returning_id(
                "INSERT INTO programming_challenges
                 (topic_id, slug, name, set_number, number, content, extra_challenge, difficulty_id)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING id",
                libsql::params![
                    new.topic_id,
                    new.slug.as_str(),
                    new.name.as_str(),
                    new.set_number,
                    new.number,
                    new.content.as_str(),
                    new.extra_challenge.as_str(),
                    new.difficulty_id
                ],
            )
            .await?;

        Ok(ProgrammingChallenge {
            id,
            topic_id: new.topic_id,
            slug: new.slug.clone(),
            name: new.name.clone(),
            set_number: new.set_number,
            number: new.number,
            content: new.content.clone(),
            extra_challenge: new.extra_challenge.clone(),
            difficulty_id: new.difficulty_id,
        })
    }

    pub async fn get_challenge(
        &self,
        topic_id: i64,
        slug: &str,
    ) -> Result<ProgrammingChallenge, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {CHALLENGE_COLS} FROM programming_challenges
                     WHERE topic_id = ?1 AND slug = ?2"
                ),
                libsql::params![topic_id, slug],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_challenge(&row)
    }

    pub async fn list_challenges(
        &self,
        topic_id: i64,
    ) -> Result<Vec<ProgrammingChallenge>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {CHALLENGE_COLS} FROM programming_challenges
                     WHERE topic_id = ?1 ORDER BY set_number, number, name"
                ),
                libsql::params![topic_id],
            )
            .await?;

        let mut challenges = Vec::new();
        while let Some(row) = rows.next().await? {
            challenges.push(row_to_challenge(&row)?);
        }
        Ok(challenges)
    }

    pub async fn insert_challenge_implementation(
        &self,
        new: &NewChallengeImplementation,
    ) -> Result<ChallengeImplementation, DatabaseError> {
        let id = self
            .insert_returning_id(
                "INSERT INTO challenge_implementations
                 (challenge_id, language_id, expected_result, hints, solution)
                 VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
                libsql::params![
                    new.challenge_id,
                    new.language_id,
                    new.expected_result.as_str(),
                    new.hints.as_str(),
                    new.solution.as_str()
                ],
            )
            .await?;

        Ok(ChallengeImplementation {
            id,
            challenge_id: new.challenge_id,
            language_id: new.language_id,
            expected_result: new.expected_result.clone(),
            hints: new.hints.clone(),
            solution: new.solution.clone(),
        })
    }

    /// Implementations of a challenge, in language display order.
    pub async fn challenge_implementations(
        &self,
        challenge_id: i64,
    ) -> Result<Vec<ChallengeImplementation>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT i.id, i.challenge_id, i.language_id, i.expected_result, i.hints, i.solution
                 FROM challenge_implementations i
                 JOIN challenge_languages l ON l.id = i.language_id
                 WHERE i.challenge_id = ?1
                 ORDER BY l.number",
                libsql::params![challenge_id],
            )
            .await?;

        let mut implementations = Vec::new();
        while let Some(row) = rows.next().await? {
            implementations.push(ChallengeImplementation {
                id: row.get(0)?,
                challenge_id: row.get(1)?,
                language_id: row.get(2)?,
                expected_result: row.get(3)?,
                hints: row.get(4)?,
                solution: row.get(5)?,
            });
        }
        Ok(implementations)
    }

    pub async fn link_challenge_outcome(
        &self,
        challenge_id: i64,
        outcome_id: i64,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO challenge_learning_outcomes (challenge_id, outcome_id)
                 VALUES (?1, ?2)",
                libsql::params![challenge_id, outcome_id],
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use kura_core::entities::NewTopic;

    use super::*;

    async fn db_with_topic() -> (KuraDb, i64) {
        let db = KuraDb::open_local(":memory:").await.unwrap();
        let topic = db
            .insert_topic(&NewTopic {
                slug: "binary-numbers".to_string(),
                name: "Binary numbers".to_string(),
                content: String::new(),
                other_resources: String::new(),
                icon: None,
            })
            .await
            .unwrap();
        (db, topic.id)
    }

    #[tokio::test]
    async fn challenge_with_implementations_roundtrip() {
        let (db, topic_id) = db_with_topic().await;
        let difficulty = db.insert_challenge_difficulty(1, "Beginner").await.unwrap();
        let python = db
            .insert_challenge_language("python", "Python", 2, None)
            .await
            .unwrap();
        let scratch = db
            .insert_challenge_language("scratch", "Scratch", 1, Some("img/scratch.png"))
            .await
            .unwrap();

        let challenge = db
            .insert_challenge(&NewChallenge {
                topic_id,
                slug: "count-to-16".to_string(),
                name: "Count to 16".to_string(),
                set_number: 1,
                number: 1,
                content: "<h1>Count to 16</h1>".to_string(),
                extra_challenge: String::new(),
                difficulty_id: difficulty.id,
            })
            .await
            .unwrap();

        for language in [&python, &scratch] {
            db.insert_challenge_implementation(&NewChallengeImplementation {
                challenge_id: challenge.id,
                language_id: language.id,
                expected_result: "<p>1 2 4 8 16</p>".to_string(),
                hints: String::new(),
                solution: "<p>…</p>".to_string(),
            })
            .await
            .unwrap();
        }

        let fetched = db.get_challenge(topic_id, "count-to-16").await.unwrap();
        assert_eq!(fetched, challenge);

        // Ordered by language number: scratch (1) before python (2).
        let implementations = db.challenge_implementations(challenge.id).await.unwrap();
        assert_eq!(implementations.len(), 2);
        assert_eq!(implementations[0].language_id, scratch.id);
        assert_eq!(implementations[1].language_id, python.id);
    }

    #[tokio::test]
    async fn duplicate_language_per_challenge_rejected() {
        let (db, topic_id) = db_with_topic().await;
        let difficulty = db.insert_challenge_difficulty(1, "Beginner").await.unwrap();
        let python = db
            .insert_challenge_language("python", "Python", 1, None)
            .await
            .unwrap();
        let challenge = db
            .insert_challenge(&NewChallenge {
                topic_id,
                slug: "count".to_string(),
                name: "Count".to_string(),
                set_number: 1,
                number: 1,
                content: String::new(),
                extra_challenge: String::new(),
                difficulty_id: difficulty.id,
            })
            .await
            .unwrap();

        let implementation = NewChallengeImplementation {
            challenge_id: challenge.id,
            language_id: python.id,
            expected_result: String::new(),
            hints: String::new(),
            solution: String::new(),
        };
        db.insert_challenge_implementation(&implementation).await.unwrap();
        let result = db.insert_challenge_implementation(&implementation).await;
        assert!(result.is_err(), "one implementation per language");
    }

    #[tokio::test]
    async fn list_orders_by_set_then_number() {
        let (db, topic_id) = db_with_topic().await;
        let difficulty = db.insert_challenge_difficulty(1, "Beginner").await.unwrap();

        for (slug, set_number, number) in [("b", 1, 2), ("c", 2, 1), ("a", 1, 1)] {
            db.insert_challenge(&NewChallenge {
                topic_id,
                slug: slug.to_string(),
                name: slug.to_uppercase(),
                set_number,
                number,
                content: String::new(),
                extra_challenge: String::new(),
                difficulty_id: difficulty.id,
            })
            .await
            .unwrap();
        }

        let challenges = db.list_challenges(topic_id).await.unwrap();
        let slugs: Vec<&str> = challenges.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);
    }
}
