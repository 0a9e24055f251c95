use std::path::PathBuf;

use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::find_project_root;

/// Load the layered config, with the project's `.env` applied first.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<kura_config::KuraConfig> {
    if let Some(project) = &flags.project {
        let env_path = PathBuf::from(project).join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        }
    } else {
        dotenvy::dotenv().ok();
    }

    kura_config::KuraConfig::load().map_err(anyhow::Error::from)
}

/// Resolve the project root: an explicit `--project` path, or the nearest
/// ancestor of the current directory containing `.kura/`.
pub fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);
        if explicit.is_dir() {
            return Ok(explicit);
        }
        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    find_project_root(&start)
        .context("not a kura project (no .kura directory found). Run 'kura init' first.")
}
