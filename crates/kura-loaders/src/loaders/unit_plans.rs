//! Unit plan loader.

use std::path::Path;

use kura_content::markdown::convert_file;
use kura_content::structures::UnitPlanStructure;
use kura_content::yaml::{read_yaml, require};
use kura_core::entities::{NewUnitPlan, Topic};

use crate::context::{LoadContext, sibling};
use crate::error::LoadError;
use crate::loaders::lessons;

pub(crate) async fn load(
    ctx: &mut LoadContext<'_>,
    path: &Path,
    topic: &Topic,
) -> Result<(), LoadError> {
    let structure: UnitPlanStructure = read_yaml(path)?;
    let slug = require(structure.slug.clone(), path, "slug")?;
    let md_file = require(structure.md_file.clone(), path, "md-file")?;

    let doc = convert_file(&sibling(path, &md_file))?;
    let computational_thinking_links = match &structure.computational_thinking_md_file {
        Some(rel) => convert_file(&sibling(path, rel))?.html,
        None => String::new(),
    };

    let plan = ctx
        .db
        .insert_unit_plan(&NewUnitPlan {
            topic_id: topic.id,
            slug,
            name: doc.title.clone(),
            content: doc.html.clone(),
            computational_thinking_links,
            heading_tree: Some(doc.heading_tree_value()),
        })
        .await?;
    ctx.log.add(format!("Added Unit Plan: {}", plan.name), 1);

    let lessons_rel = require(structure.lessons.clone(), path, "lessons")?;
    lessons::load(ctx, &sibling(path, &lessons_rel), topic, &plan).await?;
    Ok(())
}
