use std::path::{Path, PathBuf};

use anyhow::Context;

use kura_config::KuraConfig;
use kura_db::KuraDb;

/// Initialized application state shared by command handlers.
pub struct AppContext {
    pub root: PathBuf,
    pub config: KuraConfig,
    pub db: KuraDb,
}

impl AppContext {
    /// Open (and migrate) the project database and capture the config.
    pub async fn init(root: PathBuf, config: KuraConfig) -> anyhow::Result<Self> {
        let db_path = root.join(&config.database.path);
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let db = KuraDb::open_local(&db_path.to_string_lossy())
            .await
            .with_context(|| format!("failed to open database at {}", db_path.display()))?;
        Ok(Self { root, config, db })
    }

    pub fn content_dir(&self) -> PathBuf {
        self.root.join(&self.config.content.dir)
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root.join(&self.config.content.static_dir)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.config.resources.output_dir)
    }

    pub fn font_path(&self) -> PathBuf {
        self.root.join(&self.config.resources.font_path)
    }
}

/// Walk up from `start` looking for a directory containing `.kura/`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        if current.join(".kura").is_dir() {
            return Some(current.to_path_buf());
        }
        dir = current.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_root_found_from_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("project");
        let nested = root.join("content/topics");
        std::fs::create_dir_all(root.join(".kura")).unwrap();
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(root));
    }

    #[test]
    fn no_kura_dir_means_no_root() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_project_root(dir.path()), None);
    }
}
