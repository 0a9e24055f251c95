//! Content error types.
//!
//! Every variant carries the offending path; loaders surface these to the
//! operator verbatim, so messages name the file first.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or validating content files.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A structure, markdown, or image file named by the content tree does
    /// not exist.
    #[error("Could not find required file: {path}")]
    MissingFile { path: PathBuf },

    /// A file exists but could not be read.
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A structure file is not valid YAML (or does not match the expected
    /// shape).
    #[error("Invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A structure file omits a field the loader requires.
    #[error("Missing required field '{field}' in {path}")]
    MissingRequiredField { path: PathBuf, field: &'static str },

    /// A field holds a value outside its enumerated or structural domain.
    #[error("Invalid value for '{field}' in {path}: expected {expected}")]
    InvalidValue {
        path: PathBuf,
        field: String,
        expected: String,
    },

    /// A markdown file has no heading to take the record name from.
    #[error("No heading found in markdown file: {path}")]
    NoHeading { path: PathBuf },
}
