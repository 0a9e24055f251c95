//! Topic loader.
//!
//! Drives the per-topic child loaders. Programming challenges load before
//! unit plans so lessons can reference them; curriculum integrations load
//! last so they can reference lessons.

use std::path::Path;

use kura_content::markdown::convert_file;
use kura_content::structures::TopicStructure;
use kura_content::yaml::{read_yaml, require};
use kura_core::entities::NewTopic;

use crate::context::{LoadContext, sibling};
use crate::error::LoadError;
use crate::loaders::{challenges, integrations, unit_plans};

pub(crate) async fn load(ctx: &mut LoadContext<'_>, path: &Path) -> Result<(), LoadError> {
    let structure: TopicStructure = read_yaml(path)?;
    let slug = require(structure.slug.clone(), path, "slug")?;
    let md_file = require(structure.md_file.clone(), path, "md-file")?;

    let doc = convert_file(&sibling(path, &md_file))?;
    let other_resources = match &structure.other_resources_md_file {
        Some(rel) => convert_file(&sibling(path, rel))?.html,
        None => String::new(),
    };

    let topic = ctx
        .db
        .insert_topic(&NewTopic {
            slug,
            name: doc.title,
            content: doc.html,
            other_resources,
            icon: structure.icon.clone(),
        })
        .await?;
    ctx.log.add(format!("Added Topic: {}", topic.name), 0);

    if let Some(rel) = &structure.programming_challenges {
        challenges::load(ctx, &sibling(path, rel), &topic).await?;
    }
    for rel in &structure.unit_plans {
        unit_plans::load(ctx, &sibling(path, rel), &topic).await?;
    }
    if let Some(rel) = &structure.curriculum_integrations {
        integrations::load(ctx, &sibling(path, rel), &topic).await?;
    }
    Ok(())
}
