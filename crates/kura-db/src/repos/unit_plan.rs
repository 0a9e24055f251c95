//! Unit plan repository.

use kura_core::entities::{NewUnitPlan, UnitPlan};

use crate::KuraDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_json, json_to_column};

const SELECT_COLS: &str =
    "id, topic_id, slug, name, content, computational_thinking_links, heading_tree";

fn row_to_unit_plan(row: &libsql::Row) -> Result<UnitPlan, DatabaseError> {
    Ok(UnitPlan {
        id: row.get(0)?,
        topic_id: row.get(1)?,
        slug: row.get(2)?,
        name: row.get(3)?,
        content: row.get(4)?,
        computational_thinking_links: row.get(5)?,
        heading_tree: get_opt_json(row, 6)?,
    })
}

impl KuraDb {
    pub async fn insert_unit_plan(&self, new: &NewUnitPlan) -> Result<UnitPlan, DatabaseError> {
        let id = self
            .insert_returning_id(
                "INSERT INTO unit_plans
                 (topic_id, slug, name, content, computational_thinking_links, heading_tree)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id",
                libsql::params![
                    new.topic_id,
                    new.slug.as_str(),
                    new.name.as_str(),
                    new.content.as_str(),
                    new.computational_thinking_links.as_str(),
                    json_to_column(new.heading_tree.as_ref())
                ],
            )
            .await?;

        Ok(UnitPlan {
            id,
            topic_id: new.topic_id,
            slug: new.slug.clone(),
            name: new.name.clone(),
            content: new.content.clone(),
            computational_thinking_links: new.computational_thinking_links.clone(),
            heading_tree: new.heading_tree.clone(),
        })
    }

    pub async fn get_unit_plan(
        &self,
        topic_id: i64,
        slug: &str,
    ) -> Result<UnitPlan, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM unit_plans WHERE topic_id = ?1 AND slug = ?2"),
                libsql::params![topic_id, slug],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_unit_plan(&row)
    }

    pub async fn list_unit_plans(&self, topic_id: i64) -> Result<Vec<UnitPlan>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM unit_plans WHERE topic_id = ?1 ORDER BY name"),
                libsql::params![topic_id],
            )
            .await?;

        let mut plans = Vec::new();
        while let Some(row) = rows.next().await? {
            plans.push(row_to_unit_plan(&row)?);
        }
        Ok(plans)
    }
}
