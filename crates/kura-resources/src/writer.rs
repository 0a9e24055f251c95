//! Persisting generated pages and thumbnails.

use std::path::{Path, PathBuf};

use crate::error::ResourceError;
use crate::generator::Page;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ResourceError + '_ {
    move |source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Write one page as `{base_name}-{number}.html` / `….png`.
///
/// # Errors
///
/// `ResourceError::Io` / `ResourceError::Image` on write failure.
pub fn write_page(
    page: &Page,
    out_dir: &Path,
    base_name: &str,
    number: usize,
) -> Result<PathBuf, ResourceError> {
    std::fs::create_dir_all(out_dir).map_err(io_error(out_dir))?;

    let path = match page {
        Page::Html(content) => {
            let path = out_dir.join(format!("{base_name}-{number}.html"));
            std::fs::write(&path, content).map_err(io_error(&path))?;
            path
        }
        Page::Image(image) => {
            let path = out_dir.join(format!("{base_name}-{number}.png"));
            image.save(&path)?;
            path
        }
    };
    tracing::debug!(path = %path.display(), "wrote resource page");
    Ok(path)
}

/// Write pages to `out_dir`, numbered from 1 in print order. Returns the
/// written paths.
///
/// # Errors
///
/// `ResourceError::Io` / `ResourceError::Image` on write failure.
pub fn write_pages(
    pages: &[Page],
    out_dir: &Path,
    base_name: &str,
) -> Result<Vec<PathBuf>, ResourceError> {
    let mut paths = Vec::with_capacity(pages.len());
    for (index, page) in pages.iter().enumerate() {
        paths.push(write_page(page, out_dir, base_name, index + 1)?);
    }
    Ok(paths)
}

/// Copy a thumbnail source into `out_dir` as `{base_name}-thumbnail.png`.
///
/// The image is copied unresized; the bundled sources are already small.
///
/// # Errors
///
/// `ResourceError::MissingFile` when the source does not exist,
/// `ResourceError::Io` on copy failure.
pub fn copy_thumbnail(
    source: &Path,
    out_dir: &Path,
    base_name: &str,
) -> Result<PathBuf, ResourceError> {
    if !source.is_file() {
        return Err(ResourceError::MissingFile {
            path: source.to_path_buf(),
        });
    }
    std::fs::create_dir_all(out_dir).map_err(io_error(out_dir))?;
    let target = out_dir.join(format!("{base_name}-thumbnail.png"));
    std::fs::copy(source, &target).map_err(io_error(&target))?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use image::RgbImage;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn writes_html_and_png_pages_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let pages = vec![
            Page::Html("<h1>Pixel Painter</h1>".to_string()),
            Page::Image(RgbImage::new(4, 4)),
            Page::Image(RgbImage::new(4, 4)),
        ];

        let paths = write_pages(&pages, dir.path(), "pixel-painter-fish").unwrap();
        assert_eq!(paths.len(), 3);
        assert!(paths[0].ends_with("pixel-painter-fish-1.html"));
        assert!(paths[1].ends_with("pixel-painter-fish-2.png"));
        assert!(paths[2].ends_with("pixel-painter-fish-3.png"));
        for path in &paths {
            assert!(path.is_file(), "{} should exist", path.display());
        }

        let html = std::fs::read_to_string(&paths[0]).unwrap();
        assert_eq!(html, "<h1>Pixel Painter</h1>");
    }

    #[test]
    fn thumbnail_copy_requires_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("fish-black-white.png");
        let out = dir.path().join("out");

        let missing = copy_thumbnail(&source, &out, "pixel-painter");
        assert!(matches!(missing, Err(ResourceError::MissingFile { .. })));

        RgbImage::new(2, 2).save(&source).unwrap();
        let target = copy_thumbnail(&source, &out, "pixel-painter").unwrap();
        assert!(target.is_file());
        assert!(target.ends_with("pixel-painter-thumbnail.png"));
    }
}
