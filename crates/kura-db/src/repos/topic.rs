//! Topic repository.

use kura_core::entities::{NewTopic, Topic};

use crate::KuraDb;
use crate::error::DatabaseError;
use crate::helpers::get_opt_string;

const SELECT_COLS: &str = "id, slug, name, content, other_resources, icon";

fn row_to_topic(row: &libsql::Row) -> Result<Topic, DatabaseError> {
    Ok(Topic {
        id: row.get(0)?,
        slug: row.get(1)?,
        name: row.get(2)?,
        content: row.get(3)?,
        other_resources: row.get(4)?,
        icon: get_opt_string(row, 5)?,
    })
}

impl KuraDb {
    pub async fn insert_topic(&self, new: &NewTopic) -> Result<Topic, DatabaseError> {
        let id = self
            .insert_returning_id(
                "INSERT INTO topics (slug, name, content, other_resources, icon)
                 VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
                libsql::params![
                    new.slug.as_str(),
                    new.name.as_str(),
                    new.content.as_str(),
                    new.other_resources.as_str(),
                    new.icon.as_deref()
                ],
            )
            .await?;

        Ok(Topic {
            id,
            slug: new.slug.clone(),
            name: new.name.clone(),
            content: new.content.clone(),
            other_resources: new.other_resources.clone(),
            icon: new.icon.clone(),
        })
    }

    pub async fn get_topic(&self, slug: &str) -> Result<Topic, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM topics WHERE slug = ?1"),
                [slug],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_topic(&row)
    }

    pub async fn list_topics(&self) -> Result<Vec<Topic>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM topics ORDER BY name"), ())
            .await?;

        let mut topics = Vec::new();
        while let Some(row) = rows.next().await? {
            topics.push(row_to_topic(&row)?);
        }
        Ok(topics)
    }
}
