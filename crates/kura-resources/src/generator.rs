//! The generator contract shared by all printable resources.

use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use image::RgbImage;

use crate::error::ResourceError;

/// One output page, in print order.
pub enum Page {
    /// An HTML snippet page (grid reference, encodings, …).
    Html(String),
    /// A rasterized page.
    Image(RgbImage),
}

/// Font used for labels on rasterized pages.
pub struct PageFonts {
    pub font: FontVec,
}

impl PageFonts {
    /// Load the label font from a TTF file.
    ///
    /// # Errors
    ///
    /// `ResourceError::MissingFile` if the path is not a file,
    /// `ResourceError::FontLoad` if the bytes are not a usable font.
    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        if !path.is_file() {
            return Err(ResourceError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        let data = std::fs::read(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontVec::try_from_vec(data).map_err(|_| ResourceError::FontLoad {
            path: path.to_path_buf(),
        })?;
        Ok(Self { font })
    }
}

/// Everything a generator needs from the environment.
pub struct GeneratorEnv {
    /// Static asset root (source images, thumbnails).
    pub static_dir: PathBuf,
    pub fonts: PageFonts,
}

/// A printable resource generator.
pub trait ResourceGenerator {
    /// Registry slug.
    fn slug(&self) -> &'static str;

    /// Option-dependent subtitle, used in file names after the resource
    /// name.
    fn subtitle(&self) -> String;

    /// Produce the pages for one copy of the resource, in print order.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError` for missing source files or unlabeled pixel
    /// values.
    fn generate(&self, env: &GeneratorEnv) -> Result<Vec<Page>, ResourceError>;

    /// The file copied (unresized) as the resource thumbnail.
    fn thumbnail_source(&self, env: &GeneratorEnv) -> PathBuf;
}
