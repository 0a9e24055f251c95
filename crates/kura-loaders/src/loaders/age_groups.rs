//! Age group loader.

use std::path::Path;

use kura_content::structures::AgeGroupsStructure;
use kura_content::yaml::{read_yaml, require};

use crate::context::LoadContext;
use crate::error::LoadError;

pub(crate) async fn load(ctx: &mut LoadContext<'_>, path: &Path) -> Result<(), LoadError> {
    let structure: AgeGroupsStructure = read_yaml(path)?;

    for (slug, entry) in &structure {
        let min_age = require(entry.min_age, path, "min-age")?;
        let max_age = require(entry.max_age, path, "max-age")?;
        ctx.db
            .insert_age_group(slug, min_age, max_age, &entry.description)
            .await?;
        ctx.log.add(format!("Added Age Group: {slug}"), 0);
    }
    Ok(())
}
