//! Classroom resource loader.

use std::path::Path;

use kura_content::structures::ClassroomResourcesStructure;
use kura_content::yaml::read_yaml;

use crate::context::LoadContext;
use crate::error::LoadError;

pub(crate) async fn load(ctx: &mut LoadContext<'_>, path: &Path) -> Result<(), LoadError> {
    let structure: ClassroomResourcesStructure = read_yaml(path)?;

    for (slug, description) in &structure {
        ctx.db.insert_classroom_resource(slug, description).await?;
        ctx.log
            .add(format!("Added Classroom Resource: {description}"), 0);
    }
    Ok(())
}
