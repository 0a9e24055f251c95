//! Learning outcome repository.

use kura_core::entities::{CurriculumArea, LearningOutcome};

use crate::KuraDb;
use crate::error::DatabaseError;
use crate::helpers::get_opt_i64;

const SELECT_COLS: &str = "id, slug, text";

fn row_to_outcome(row: &libsql::Row) -> Result<LearningOutcome, DatabaseError> {
    Ok(LearningOutcome {
        id: row.get(0)?,
        slug: row.get(1)?,
        text: row.get(2)?,
    })
}

impl KuraDb {
    pub async fn insert_learning_outcome(
        &self,
        slug: &str,
        text: &str,
    ) -> Result<LearningOutcome, DatabaseError> {
        let id = self
            .insert_returning_id(
                "INSERT INTO learning_outcomes (slug, text) VALUES (?1, ?2) RETURNING id",
                libsql::params![slug, text],
            )
            .await?;

        Ok(LearningOutcome {
            id,
            slug: slug.to_string(),
            text: text.to_string(),
        })
    }

    pub async fn get_learning_outcome(&self, slug: &str) -> Result<LearningOutcome, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM learning_outcomes WHERE slug = ?1"),
                [slug],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_outcome(&row)
    }

    pub async fn list_learning_outcomes(&self) -> Result<Vec<LearningOutcome>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM learning_outcomes ORDER BY slug"),
                (),
            )
            .await?;

        let mut outcomes = Vec::new();
        while let Some(row) = rows.next().await? {
            outcomes.push(row_to_outcome(&row)?);
        }
        Ok(outcomes)
    }

    /// Tag an outcome with a curriculum area.
    pub async fn link_outcome_area(
        &self,
        outcome_id: i64,
        area_id: i64,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO learning_outcome_areas (outcome_id, area_id) VALUES (?1, ?2)",
                libsql::params![outcome_id, area_id],
            )
            .await?;
        Ok(())
    }

    /// Areas tagged on an outcome, in area display order.
    pub async fn outcome_areas(
        &self,
        outcome_id: i64,
    ) -> Result<Vec<CurriculumArea>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT a.id, a.slug, a.name, a.number, a.colour, a.parent_id
                 FROM learning_outcome_areas la
                 JOIN curriculum_areas a ON a.id = la.area_id
                 WHERE la.outcome_id = ?1
                 ORDER BY a.number, a.name",
                libsql::params![outcome_id],
            )
            .await?;

        let mut areas = Vec::new();
        while let Some(row) = rows.next().await? {
            areas.push(CurriculumArea {
                id: row.get(0)?,
                slug: row.get(1)?,
                name: row.get(2)?,
                number: row.get(3)?,
                colour: row.get(4)?,
                parent_id: get_opt_i64(&row, 5)?,
            });
        }
        Ok(areas)
    }
}
