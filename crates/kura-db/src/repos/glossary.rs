//! Glossary term repository.

use kura_core::entities::GlossaryTerm;

use crate::KuraDb;
use crate::error::DatabaseError;

const SELECT_COLS: &str = "id, slug, term, definition";

fn row_to_term(row: &libsql::Row) -> Result<GlossaryTerm, DatabaseError> {
    Ok(GlossaryTerm {
        id: row.get(0)?,
        slug: row.get(1)?,
        term: row.get(2)?,
        definition: row.get(3)?,
    })
}

impl KuraDb {
    pub async fn insert_glossary_term(
        &self,
        slug: &str,
        term: &str,
        definition: &str,
    ) -> Result<GlossaryTerm, DatabaseError> {
        let id = self
            .insert_returning_id(
                "INSERT INTO glossary_terms (slug, term, definition)
                 VALUES (?1, ?2, ?3) RETURNING id",
                libsql::params![slug, term, definition],
            )
            .await?;

        Ok(GlossaryTerm {
            id,
            slug: slug.to_string(),
            term: term.to_string(),
            definition: definition.to_string(),
        })
    }

    pub async fn get_glossary_term(&self, slug: &str) -> Result<GlossaryTerm, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM glossary_terms WHERE slug = ?1"),
                [slug],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_term(&row)
    }

    pub async fn list_glossary_terms(&self) -> Result<Vec<GlossaryTerm>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM glossary_terms ORDER BY term"),
                (),
            )
            .await?;

        let mut terms = Vec::new();
        while let Some(row) = rows.next().await? {
            terms.push(row_to_term(&row)?);
        }
        Ok(terms)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn roundtrip_and_unique_term() {
        let db = KuraDb::open_local(":memory:").await.unwrap();
        db.insert_glossary_term("bit", "Bit", "<p>A binary digit.</p>")
            .await
            .unwrap();

        let fetched = db.get_glossary_term("bit").await.unwrap();
        assert_eq!(fetched.term, "Bit");

        let duplicate = db
            .insert_glossary_term("bit-2", "Bit", "<p>Again.</p>")
            .await;
        assert!(duplicate.is_err(), "duplicate term should be rejected");
    }
}
