//! Printable resource loader.
//!
//! Beyond field presence, a resource is valid only if its generator slug is
//! registered and its thumbnail exists under the static directory.

use std::path::Path;

use kura_content::error::ContentError;
use kura_content::structures::ResourcesStructure;
use kura_content::yaml::{read_yaml, require};
use kura_resources::registry;

use crate::context::LoadContext;
use crate::error::LoadError;

pub(crate) async fn load(ctx: &mut LoadContext<'_>, path: &Path) -> Result<(), LoadError> {
    let structure: ResourcesStructure = read_yaml(path)?;

    for (slug, entry) in &structure {
        let name = require(entry.name.clone(), path, "name")?;
        let generator = require(entry.generator.clone(), path, "generator")?;
        let thumbnail = require(entry.thumbnail.clone(), path, "thumbnail")?;
        let copies = require(entry.copies, path, "copies")?;

        if !registry::is_registered(&generator) {
            return Err(ContentError::InvalidValue {
                path: path.to_path_buf(),
                field: "generator".to_string(),
                expected: registry::REGISTERED.join(", "),
            }
            .into());
        }

        let thumbnail_path = ctx.static_dir.join(&thumbnail);
        if !thumbnail_path.is_file() {
            return Err(ContentError::MissingFile {
                path: thumbnail_path,
            }
            .into());
        }

        ctx.db
            .insert_resource(slug, &name, &generator, &thumbnail, copies)
            .await?;
        ctx.log.add(format!("Added Resource: {name}"), 0);
    }
    Ok(())
}
