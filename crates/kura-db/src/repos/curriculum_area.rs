//! Curriculum area repository.

use kura_core::entities::CurriculumArea;

use crate::KuraDb;
use crate::error::DatabaseError;
use crate::helpers::get_opt_i64;

const SELECT_COLS: &str = "id, slug, name, number, colour, parent_id";

fn row_to_area(row: &libsql::Row) -> Result<CurriculumArea, DatabaseError> {
    Ok(CurriculumArea {
        id: row.get(0)?,
        slug: row.get(1)?,
        name: row.get(2)?,
        number: row.get(3)?,
        colour: row.get(4)?,
        parent_id: get_opt_i64(row, 5)?,
    })
}

impl KuraDb {
    pub async fn insert_curriculum_area(
        &self,
        slug: &str,
        name: &str,
        number: i64,
        colour: &str,
        parent_id: Option<i64>,
    ) -> Result<CurriculumArea, DatabaseError> {
        let id = self
            .insert_returning_id(
                "INSERT INTO curriculum_areas (slug, name, number, colour, parent_id)
                 VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
                libsql::params![slug, name, number, colour, parent_id],
            )
            .await?;

        Ok(CurriculumArea {
            id,
            slug: slug.to_string(),
            name: name.to_string(),
            number,
            colour: colour.to_string(),
            parent_id,
        })
    }

    pub async fn get_curriculum_area(&self, slug: &str) -> Result<CurriculumArea, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM curriculum_areas WHERE slug = ?1"),
                [slug],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_area(&row)
    }

    pub async fn list_curriculum_areas(&self) -> Result<Vec<CurriculumArea>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM curriculum_areas ORDER BY number, name"),
                (),
            )
            .await?;

        let mut areas = Vec::new();
        while let Some(row) = rows.next().await? {
            areas.push(row_to_area(&row)?);
        }
        Ok(areas)
    }
}
