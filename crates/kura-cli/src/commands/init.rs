use std::path::PathBuf;

use anyhow::Context;

use crate::cli::{GlobalFlags, InitArgs};

/// Create `.kura/` with a default config file. Idempotent: an existing
/// config is left untouched.
pub fn run(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = match &args.dir {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir().context("failed to read current directory")?,
    };

    let kura_dir = root.join(".kura");
    std::fs::create_dir_all(&kura_dir)
        .with_context(|| format!("failed to create {}", kura_dir.display()))?;

    let config_path = kura_dir.join("config.toml");
    if config_path.exists() {
        tracing::debug!(path = %config_path.display(), "config already present");
    } else {
        let config = kura_config::KuraConfig::default();
        let rendered = toml::to_string_pretty(&config).context("failed to render default config")?;
        std::fs::write(&config_path, rendered)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
    }

    if !flags.quiet {
        println!("Initialized kura project at {}", root.display());
    }
    Ok(())
}
