//! Learning outcome loader.

use std::path::Path;

use kura_content::structures::LearningOutcomesStructure;
use kura_content::yaml::{read_yaml, require};

use crate::context::LoadContext;
use crate::error::{LoadError, unknown_reference};

pub(crate) async fn load(ctx: &mut LoadContext<'_>, path: &Path) -> Result<(), LoadError> {
    let structure: LearningOutcomesStructure = read_yaml(path)?;

    for (slug, entry) in &structure {
        let text = require(entry.text.clone(), path, "text")?;
        let outcome = ctx.db.insert_learning_outcome(slug, &text).await?;

        for area_slug in &entry.curriculum_areas {
            let area = ctx
                .db
                .get_curriculum_area(area_slug)
                .await
                .map_err(|e| unknown_reference(e, path, "curriculum area", area_slug))?;
            ctx.db.link_outcome_area(outcome.id, area.id).await?;
        }
        ctx.log.add(format!("Added Learning Outcome: {text}"), 0);
    }
    Ok(())
}
