//! Curriculum area loader.

use std::path::Path;

use kura_content::structures::CurriculumAreasStructure;
use kura_content::yaml::{read_yaml, require};

use crate::context::LoadContext;
use crate::error::LoadError;

pub(crate) async fn load(ctx: &mut LoadContext<'_>, path: &Path) -> Result<(), LoadError> {
    let structure: CurriculumAreasStructure = read_yaml(path)?;

    for (slug, area) in &structure {
        let name = require(area.name.clone(), path, "name")?;
        let number = require(area.number, path, "number")?;
        let parent = ctx
            .db
            .insert_curriculum_area(slug, &name, number, &area.colour, None)
            .await?;
        ctx.log.add(format!("Added Curriculum Area: {name}"), 0);

        for (child_slug, child) in &area.children {
            let child_name = require(child.name.clone(), path, "name")?;
            let child_number = child.number.unwrap_or(number);
            ctx.db
                .insert_curriculum_area(
                    child_slug,
                    &child_name,
                    child_number,
                    &area.colour,
                    Some(parent.id),
                )
                .await?;
            ctx.log
                .add(format!("Added Curriculum Area: {name}: {child_name}"), 1);
        }
    }
    Ok(())
}
