//! Classroom resource repository.

use kura_core::entities::ClassroomResource;

use crate::KuraDb;
use crate::error::DatabaseError;

const SELECT_COLS: &str = "id, slug, description";

fn row_to_classroom_resource(row: &libsql::Row) -> Result<ClassroomResource, DatabaseError> {
    Ok(ClassroomResource {
        id: row.get(0)?,
        slug: row.get(1)?,
        description: row.get(2)?,
    })
}

impl KuraDb {
    pub async fn insert_classroom_resource(
        &self,
        slug: &str,
        description: &str,
    ) -> Result<ClassroomResource, DatabaseError> {
        let id = self
            .insert_returning_id(
                "INSERT INTO classroom_resources (slug, description) VALUES (?1, ?2) RETURNING id",
                libsql::params![slug, description],
            )
            .await?;

        Ok(ClassroomResource {
            id,
            slug: slug.to_string(),
            description: description.to_string(),
        })
    }

    pub async fn get_classroom_resource(
        &self,
        slug: &str,
    ) -> Result<ClassroomResource, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM classroom_resources WHERE slug = ?1"),
                [slug],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_classroom_resource(&row)
    }

    pub async fn list_classroom_resources(&self) -> Result<Vec<ClassroomResource>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM classroom_resources ORDER BY slug"),
                (),
            )
            .await?;

        let mut resources = Vec::new();
        while let Some(row) = rows.next().await? {
            resources.push(row_to_classroom_resource(&row)?);
        }
        Ok(resources)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn roundtrip() {
        let db = KuraDb::open_local(":memory:").await.unwrap();
        db.insert_classroom_resource("dice", "Dice (6-sided)")
            .await
            .unwrap();

        let fetched = db.get_classroom_resource("dice").await.unwrap();
        assert_eq!(fetched.description, "Dice (6-sided)");
        assert_eq!(db.list_classroom_resources().await.unwrap().len(), 1);
    }
}
