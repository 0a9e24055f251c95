//! Loader error types.

use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use kura_content::ContentError;
use kura_db::error::DatabaseError;
use kura_resources::ResourceError;

/// Errors surfaced to the operator running a load command.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File or validation problem in the content tree.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Database failure (including constraint violations).
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Resource generator validation failure.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// A slug reference points at nothing loaded.
    #[error("Unknown {kind} '{slug}' referenced in {path}")]
    UnknownReference {
        path: PathBuf,
        kind: &'static str,
        slug: String,
    },
}

/// Map a repository `NoResult` into the typed unknown-reference error.
pub(crate) fn unknown_reference(
    error: DatabaseError,
    path: &Path,
    kind: &'static str,
    slug: &str,
) -> LoadError {
    match error {
        DatabaseError::NoResult => LoadError::UnknownReference {
            path: path.to_path_buf(),
            kind,
            slug: slug.to_string(),
        },
        other => LoadError::Database(other),
    }
}
