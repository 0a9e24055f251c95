//! Age group repository.

use kura_core::entities::AgeGroup;

use crate::KuraDb;
use crate::error::DatabaseError;

const SELECT_COLS: &str = "id, slug, min_age, max_age, description";

fn row_to_age_group(row: &libsql::Row) -> Result<AgeGroup, DatabaseError> {
    Ok(AgeGroup {
        id: row.get(0)?,
        slug: row.get(1)?,
        min_age: row.get(2)?,
        max_age: row.get(3)?,
        description: row.get(4)?,
    })
}

impl KuraDb {
    pub async fn insert_age_group(
        &self,
        slug: &str,
        min_age: i64,
        max_age: i64,
        description: &str,
    ) -> Result<AgeGroup, DatabaseError> {
        let id = self
            .insert_returning_id(
                "INSERT INTO age_groups (slug, min_age, max_age, description)
                 VALUES (?1, ?2, ?3, ?4) RETURNING id",
                libsql::params![slug, min_age, max_age, description],
            )
            .await?;

        Ok(AgeGroup {
            id,
            slug: slug.to_string(),
            min_age,
            max_age,
            description: description.to_string(),
        })
    }

    pub async fn get_age_group(&self, slug: &str) -> Result<AgeGroup, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM age_groups WHERE slug = ?1"),
                [slug],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_age_group(&row)
    }

    pub async fn list_age_groups(&self) -> Result<Vec<AgeGroup>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM age_groups ORDER BY min_age, max_age"),
                (),
            )
            .await?;

        let mut groups = Vec::new();
        while let Some(row) = rows.next().await? {
            groups.push(row_to_age_group(&row)?);
        }
        Ok(groups)
    }
}
