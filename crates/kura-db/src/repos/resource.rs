//! Printable resource repository.

use kura_core::entities::Resource;

use crate::KuraDb;
use crate::error::DatabaseError;

const SELECT_COLS: &str = "id, slug, name, generator, thumbnail, copies";

fn row_to_resource(row: &libsql::Row) -> Result<Resource, DatabaseError> {
    Ok(Resource {
        id: row.get(0)?,
        slug: row.get(1)?,
        name: row.get(2)?,
        generator: row.get(3)?,
        thumbnail: row.get(4)?,
        copies: row.get::<i64>(5)? != 0,
    })
}

impl KuraDb {
    pub async fn insert_resource(
        &self,
        slug: &str,
        name: &str,
        generator: &str,
        thumbnail: &str,
        copies: bool,
    ) -> Result<Resource, DatabaseError> {
        let id = self
            .insert_returning_id(
                "INSERT INTO resources (slug, name, generator, thumbnail, copies)
                 VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
                libsql::params![slug, name, generator, thumbnail, i64::from(copies)],
            )
            .await?;

        Ok(Resource {
            id,
            slug: slug.to_string(),
            name: name.to_string(),
            generator: generator.to_string(),
            thumbnail: thumbnail.to_string(),
            copies,
        })
    }

    pub async fn get_resource(&self, slug: &str) -> Result<Resource, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM resources WHERE slug = ?1"),
                [slug],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_resource(&row)
    }

    pub async fn list_resources(&self) -> Result<Vec<Resource>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM resources ORDER BY name"), ())
            .await?;

        let mut resources = Vec::new();
        while let Some(row) = rows.next().await? {
            resources.push(row_to_resource(&row)?);
        }
        Ok(resources)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn roundtrip_preserves_copies_flag() {
        let db = KuraDb::open_local(":memory:").await.unwrap();
        db.insert_resource(
            "pixel-painter",
            "Pixel Painter",
            "pixel-painter",
            "img/resources/pixel-painter/thumbnail.png",
            true,
        )
        .await
        .unwrap();

        let fetched = db.get_resource("pixel-painter").await.unwrap();
        assert!(fetched.copies);
        assert_eq!(fetched.generator, "pixel-painter");
    }
}
