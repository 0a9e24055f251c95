//! Curriculum integration repository.

use kura_core::entities::{CurriculumIntegration, NewCurriculumIntegration};

use crate::KuraDb;
use crate::error::DatabaseError;

const SELECT_COLS: &str = "id, topic_id, slug, number, name, content";

fn row_to_integration(row: &libsql::Row) -> Result<CurriculumIntegration, DatabaseError> {
    Ok(CurriculumIntegration {
        id: row.get(0)?,
        topic_id: row.get(1)?,
        slug: row.get(2)?,
        number: row.get(3)?,
        name: row.get(4)?,
        content: row.get(5)?,
    })
}

impl KuraDb {
    pub async fn insert_curriculum_integration(
        &self,
        new: &NewCurriculumIntegration,
    ) -> Result<CurriculumIntegration, DatabaseError> {
        let id = self
            .insert_returning_id(
                "INSERT INTO curriculum_integrations (topic_id, slug, number, name, content)
                 VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
                libsql::params![
                    new.topic_id,
                    new.slug.as_str(),
                    new.number,
                    new.name.as_str(),
                    new.content.as_str()
                ],
            )
            .await?;

        Ok(CurriculumIntegration {
            id,
            topic_id: new.topic_id,
            slug: new.slug.clone(),
            number: new.number,
            name: new.name.clone(),
            content: new.content.clone(),
        })
    }

    pub async fn list_curriculum_integrations(
        &self,
        topic_id: i64,
    ) -> Result<Vec<CurriculumIntegration>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM curriculum_integrations
                     WHERE topic_id = ?1 ORDER BY number"
                ),
                libsql::params![topic_id],
            )
            .await?;

        let mut integrations = Vec::new();
        while let Some(row) = rows.next().await? {
            integrations.push(row_to_integration(&row)?);
        }
        Ok(integrations)
    }

    pub async fn link_integration_area(
        &self,
        integration_id: i64,
        area_id: i64,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO integration_curriculum_areas (integration_id, area_id)
                 VALUES (?1, ?2)",
                libsql::params![integration_id, area_id],
            )
            .await?;
        Ok(())
    }

    pub async fn link_integration_prerequisite_lesson(
        &self,
        integration_id: i64,
        lesson_id: i64,
    ) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO integration_prerequisite_lessons (integration_id, lesson_id)
                 VALUES (?1, ?2)",
                libsql::params![integration_id, lesson_id],
            )
            .await?;
        Ok(())
    }
}
