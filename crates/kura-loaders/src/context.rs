//! Shared state threaded through a load run.

use std::path::{Path, PathBuf};

use kura_db::KuraDb;

/// Indented, human-readable record of what a load inserted.
///
/// Lines are echoed after the load completes; they also go out through
/// `tracing` as they happen.
#[derive(Debug, Default)]
pub struct LoadLog {
    entries: Vec<(String, usize)>,
}

impl LoadLog {
    pub fn add(&mut self, message: impl Into<String>, indent: usize) {
        let message = message.into();
        tracing::info!(indent, "{message}");
        self.entries.push((message, indent));
    }

    #[must_use]
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Render the log as indented lines.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (message, indent) in &self.entries {
            for _ in 0..*indent {
                out.push_str("  ");
            }
            out.push_str(message);
            out.push('\n');
        }
        out
    }
}

/// Everything a loader needs: the database handle, the content and static
/// roots, and the load log.
pub struct LoadContext<'a> {
    pub db: &'a KuraDb,
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub log: LoadLog,
}

impl<'a> LoadContext<'a> {
    pub fn new(
        db: &'a KuraDb,
        content_dir: impl Into<PathBuf>,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            db,
            content_dir: content_dir.into(),
            static_dir: static_dir.into(),
            log: LoadLog::default(),
        }
    }

    /// The root structure file.
    #[must_use]
    pub fn structure_path(&self) -> PathBuf {
        self.content_dir.join("structure.yml")
    }
}

/// Resolve a structure-file reference relative to the referring file.
pub(crate) fn sibling(of: &Path, relative: &str) -> PathBuf {
    of.parent().unwrap_or_else(|| Path::new("")).join(relative)
}
