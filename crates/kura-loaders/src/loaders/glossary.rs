//! Glossary loader.
//!
//! The glossary is a directory of markdown files: the file stem is the
//! slug, the heading the term, the rendered body the definition.

use std::path::{Path, PathBuf};

use kura_content::error::ContentError;
use kura_content::markdown::convert_file;

use crate::context::LoadContext;
use crate::error::LoadError;

pub(crate) async fn load(ctx: &mut LoadContext<'_>, dir: &Path) -> Result<(), LoadError> {
    if !dir.is_dir() {
        return Err(ContentError::MissingFile {
            path: dir.to_path_buf(),
        }
        .into());
    }

    let entries = std::fs::read_dir(dir).map_err(|source| ContentError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .collect();
    paths.sort();

    for path in paths {
        let slug = path
            .file_stem()
            .and_then(std::ffi::OsStr::to_str)
            .unwrap_or_default()
            .to_string();
        let doc = convert_file(&path)?;
        ctx.db
            .insert_glossary_term(&slug, &doc.title, &doc.html)
            .await?;
        ctx.log.add(format!("Added Glossary Term: {}", doc.title), 0);
    }
    Ok(())
}
