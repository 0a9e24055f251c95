//! Lesson repository.
//!
//! Lessons carry the bulk of the join tables: age groups (with lesson
//! numbers), learning outcomes, classroom resources, generated resources
//! (with usage descriptions), and programming challenges (with lesson-local
//! numbering).

use kura_core::entities::{
    AgeGroup, LearningOutcome, Lesson, NewLesson, ProgrammingChallenge, Resource,
};

use crate::KuraDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_i64, get_opt_json, json_to_column};

const SELECT_COLS: &str = "id, topic_id, unit_plan_id, slug, name, duration, content, \
     computational_thinking_links, programming_challenges_description, heading_tree";

fn row_to_lesson(row: &libsql::Row) -> Result<Lesson, DatabaseError> {
    Ok(Lesson {
        id: row.get(0)?,
        topic_id: row.get(1)?,
        unit_plan_id: row.get(2)?,
        slug: row.get(3)?,
        name: row.get(4)?,
        duration: get_opt_i64(row, 5)?,
        content: row.get(6)?,
        computational_thinking_links: row.get(7)?,
        programming_challenges_description: row.get(8)?,
        heading_tree: get_opt_json(row, 9)?,
    })
}

impl KuraDb {
    pub async fn insert_lesson(&self, new: &NewLesson) -> Result<Lesson, DatabaseError> {
        let id = self
            .insert_returning_id(
                "INSERT INTO lessons
                 (topic_id, unit_plan_id, slug, name, duration, content,
                  computational_thinking_links, programming_challenges_description, heading_tree)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9) RETURNING id",
                libsql::params![
                    new.topic_id,
                    new.unit_plan_id,
                    new.slug.as_str(),
                    new.name.as_str(),
                    new.duration,
                    new.content.as_str(),
                    new.computational_thinking_links.as_str(),
                    new.programming_challenges_description.as_str(),
                    json_to_column(new.heading_tree.as_ref())
                ],
            )
            .await?;

        Ok(Lesson {
            id,
            topic_id: new.topic_id,
            unit_plan_id: new.unit_plan_id,
            slug: new.slug.clone(),
            name: new.name.clone(),
            duration: new.duration,
            content: new.content.clone(),
            computational_thinking_links: new.computational_thinking_links.clone(),
            programming_challenges_description: new.programming_challenges_description.clone(),
            heading_tree: new.heading_tree.clone(),
        })
    }

    pub async fn get_lesson(&self, unit_plan_id: i64, slug: &str) -> Result<Lesson, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM lessons WHERE unit_plan_id = ?1 AND slug = ?2"),
                libsql::params![unit_plan_id, slug],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_lesson(&row)
    }

    pub async fn list_lessons(&self, unit_plan_id: i64) -> Result<Vec<Lesson>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM lessons WHERE unit_plan_id = ?1 ORDER BY name"),
                libsql::params![unit_plan_id],
            )
            .await?;

        let mut lessons = Vec::new();
        while let Some(row) = rows.next().await? {
            lessons.push(row_to_lesson(&row)?);
        }
        Ok(lessons)
    }

    /// Place a lesson in an age group, with the group-local lesson number.
    pub async fn link_lesson_age_group(
        &self,
        lesson_id: i64,
        age_group_id: i64,
        number: i64,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO lesson_numbers (lesson_id, age_group_id, number) VALUES (?1, ?2, ?3)",
                libsql::params![lesson_id, age_group_id, number],
            )
            .await?;
        Ok(())
    }

    pub async fn link_lesson_outcome(
        &self,
        lesson_id: i64,
        outcome_id: i64,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO lesson_learning_outcomes (lesson_id, outcome_id) VALUES (?1, ?2)",
                libsql::params![lesson_id, outcome_id],
            )
            .await?;
        Ok(())
    }

    pub async fn link_lesson_classroom_resource(
        &self,
        lesson_id: i64,
        classroom_resource_id: i64,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO lesson_classroom_resources (lesson_id, classroom_resource_id)
                 VALUES (?1, ?2)",
                libsql::params![lesson_id, classroom_resource_id],
            )
            .await?;
        Ok(())
    }

    /// Attach a generated resource to a lesson with its usage description.
    pub async fn link_lesson_resource(
        &self,
        lesson_id: i64,
        resource_id: i64,
        description: &str,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO lesson_resources (lesson_id, resource_id, description)
                 VALUES (?1, ?2, ?3)",
                libsql::params![lesson_id, resource_id, description],
            )
            .await?;
        Ok(())
    }

    /// Attach a programming challenge with lesson-local numbering.
    pub async fn link_lesson_challenge(
        &self,
        lesson_id: i64,
        challenge_id: i64,
        set_number: i64,
        number: i64,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO lesson_challenge_numbers (lesson_id, challenge_id, set_number, number)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![lesson_id, challenge_id, set_number, number],
            )
            .await?;
        Ok(())
    }

    /// Age groups a lesson appears in, with the lesson number per group.
    pub async fn lesson_age_groups(
        &self,
        lesson_id: i64,
    ) -> Result<Vec<(AgeGroup, i64)>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT g.id, g.slug, g.min_age, g.max_age, g.description, n.number
                 FROM lesson_numbers n
                 JOIN age_groups g ON g.id = n.age_group_id
                 WHERE n.lesson_id = ?1
                 ORDER BY g.min_age, g.max_age",
                libsql::params![lesson_id],
            )
            .await?;

        let mut groups = Vec::new();
        while let Some(row) = rows.next().await? {
            groups.push((
                AgeGroup {
                    id: row.get(0)?,
                    slug: row.get(1)?,
                    min_age: row.get(2)?,
                    max_age: row.get(3)?,
                    description: row.get(4)?,
                },
                row.get(5)?,
            ));
        }
        Ok(groups)
    }

    pub async fn lesson_learning_outcomes(
        &self,
        lesson_id: i64,
    ) -> Result<Vec<LearningOutcome>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT o.id, o.slug, o.text
                 FROM lesson_learning_outcomes lo
                 JOIN learning_outcomes o ON o.id = lo.outcome_id
                 WHERE lo.lesson_id = ?1
                 ORDER BY o.slug",
                libsql::params![lesson_id],
            )
            .await?;

        let mut outcomes = Vec::new();
        while let Some(row) = rows.next().await? {
            outcomes.push(LearningOutcome {
                id: row.get(0)?,
                slug: row.get(1)?,
                text: row.get(2)?,
            });
        }
        Ok(outcomes)
    }

    /// Generated resources used by a lesson, with usage descriptions.
    pub async fn lesson_generated_resources(
        &self,
        lesson_id: i64,
    ) -> Result<Vec<(Resource, String)>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT r.id, r.slug, r.name, r.generator, r.thumbnail, r.copies, lr.description
                 FROM lesson_resources lr
                 JOIN resources r ON r.id = lr.resource_id
                 WHERE lr.lesson_id = ?1
                 ORDER BY r.name",
                libsql::params![lesson_id],
            )
            .await?;

        let mut resources = Vec::new();
        while let Some(row) = rows.next().await? {
            resources.push((
                Resource {
                    id: row.get(0)?,
                    slug: row.get(1)?,
                    name: row.get(2)?,
                    generator: row.get(3)?,
                    thumbnail: row.get(4)?,
                    copies: row.get::<i64>(5)? != 0,
                },
                row.get(6)?,
            ));
        }
        Ok(resources)
    }

    /// Challenges attached to a lesson with their lesson-local numbering,
    /// ordered by that numbering.
    pub async fn lesson_challenges(
        &self,
        lesson_id: i64,
    ) -> Result<Vec<(ProgrammingChallenge, i64, i64)>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT c.id, c.topic_id, c.slug, c.name, c.set_number, c.number,
                        c.content, c.extra_challenge, c.difficulty_id,
                        n.set_number, n.number
                 FROM lesson_challenge_numbers n
                 JOIN programming_challenges c ON c.id = n.challenge_id
                 WHERE n.lesson_id = ?1
                 ORDER BY n.set_number, n.number",
                libsql::params![lesson_id],
            )
            .await?;

        let mut challenges = Vec::new();
        while let Some(row) = rows.next().await? {
            challenges.push((
                ProgrammingChallenge {
                    id: row.get(0)?,
                    topic_id: row.get(1)?,
                    slug: row.get(2)?,
                    name: row.get(3)?,
                    set_number: row.get(4)?,
                    number: row.get(5)?,
                    content: row.get(6)?,
                    extra_challenge: row.get(7)?,
                    difficulty_id: row.get(8)?,
                },
                row.get(9)?,
                row.get(10)?,
            ));
        }
        Ok(challenges)
    }
}
