//! Resource generation error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while validating options or generating pages.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No generator is registered under the requested slug.
    #[error("Unknown resource generator: '{slug}'")]
    UnknownGenerator { slug: String },

    /// An option value is outside its enumerated domain.
    #[error("Invalid value '{value}' for option '{name}': expected one of {expected}")]
    InvalidOption {
        name: &'static str,
        value: String,
        expected: String,
    },

    /// A source pixel has no label in the method's table.
    #[error("Image: {image}\nMethod: {method}\nContains invalid pixel value: {pixel:?}")]
    UnrecognisedPixel {
        image: String,
        method: String,
        pixel: [u8; 3],
    },

    /// The page grid is taller than the A–Z row references allow.
    #[error("Page grid has {rows} rows; references only support 26")]
    GridTooTall { rows: u32 },

    /// A source image, font, or thumbnail file is missing.
    #[error("Could not find required file: {path}")]
    MissingFile { path: PathBuf },

    /// A font file exists but is not a usable TTF.
    #[error("Could not load font: {path}")]
    FontLoad { path: PathBuf },

    /// File IO failed.
    #[error("Could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image decode or encode failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
