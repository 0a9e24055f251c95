//! The Pixel Painter generator.
//!
//! Partitions a small pixel-art PNG into printable grid pages. Every box on
//! a page carries the binary label of its source pixel; students colour the
//! boxes in to reveal the image. The run-length-encoding variant leaves the
//! boxes blank and emits an encodings page instead.

mod grid;
mod html;
mod labels;
mod raster;
mod rle;

use std::fmt;
use std::path::PathBuf;

use crate::error::ResourceError;
use crate::generator::{GeneratorEnv, Page, ResourceGenerator};
use crate::options::{OptionSet, enum_option};

pub use grid::{PageSpan, page_grid, page_spans};
pub use labels::{label_table, pixel_label};
pub use rle::{encode_page, encode_row};

/// Boxes per page, horizontally.
pub const COLUMNS_PER_PAGE: u32 = 15;
/// Boxes per page, vertically.
pub const ROWS_PER_PAGE: u32 = 20;
/// Box side length in output pixels.
pub const BOX_SIZE: u32 = 200;
/// Output page width: 15 boxes × 200 px.
pub const PAGE_WIDTH: u32 = BOX_SIZE * COLUMNS_PER_PAGE;
/// Output page height: 20 boxes × 200 px.
pub const PAGE_HEIGHT: u32 = BOX_SIZE * ROWS_PER_PAGE;
/// Label font size in px.
pub const LABEL_SCALE: f32 = 80.0;
/// Page reference font size in px.
pub const REFERENCE_SCALE: f32 = 50.0;

/// How pixel values map to binary labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourMethod {
    BlackWhite,
    RunLengthEncoding,
    Greyscale,
    Colour,
}

impl ColourMethod {
    pub const ALL: [Self; 4] = [
        Self::BlackWhite,
        Self::RunLengthEncoding,
        Self::Greyscale,
        Self::Colour,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BlackWhite => "black-white",
            Self::RunLengthEncoding => "run-length-encoding",
            Self::Greyscale => "greyscale",
            Self::Colour => "colour",
        }
    }

    /// Short display name, used in subtitles.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BlackWhite => "Black and White",
            Self::RunLengthEncoding => "Run length encoding",
            Self::Greyscale => "Greyscale",
            Self::Colour => "Colour",
        }
    }

    /// Full option label, used when listing choices.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BlackWhite => "Black and White (2 possible binary values)",
            Self::RunLengthEncoding => {
                "Black and White (2 possible binary values) in Run Length Encoding"
            }
            Self::Greyscale => "Greyscale (4 possible binary values)",
            Self::Colour => "Colour (8 possible binary values)",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == value)
    }
}

impl fmt::Display for ColourMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The bundled source images.
///
/// Declaration order fixes each image's index, which prefixes every page
/// reference (`0A1` is the top-left page of the fish).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceImage {
    Fish,
    HotAirBalloon,
    Boat,
    Parrots,
}

impl SourceImage {
    pub const ALL: [Self; 4] = [Self::Fish, Self::HotAirBalloon, Self::Boat, Self::Parrots];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fish => "fish",
            Self::HotAirBalloon => "hot-air-balloon",
            Self::Boat => "boat",
            Self::Parrots => "parrots",
        }
    }

    /// Short display name, used in subtitles.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fish => "Fish",
            Self::HotAirBalloon => "Hot air balloon",
            Self::Boat => "Boat",
            Self::Parrots => "Parrots",
        }
    }

    /// Full option label, used when listing choices.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fish => "Fish - 6 pages",
            Self::HotAirBalloon => "Hot air balloon - 8 pages",
            Self::Boat => "Boat - 9 pages",
            Self::Parrots => "Parrots - 32 pages",
        }
    }

    /// Position in [`Self::ALL`]; the page reference prefix.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .into_iter()
            .position(|image| image == self)
            .unwrap_or(0)
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|image| image.as_str() == value)
    }
}

impl fmt::Display for SourceImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paper size, recorded in the subtitle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperSize {
    A4,
    Letter,
}

impl PaperSize {
    pub const ALL: [Self; 2] = [Self::A4, Self::Letter];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A4 => "a4",
            Self::Letter => "letter",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == value)
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The Pixel Painter generator.
#[derive(Debug, Clone, Copy)]
pub struct PixelPainterGenerator {
    pub method: ColourMethod,
    pub image: SourceImage,
    pub paper_size: PaperSize,
}

impl PixelPainterGenerator {
    pub const SLUG: &'static str = "pixel-painter";

    #[must_use]
    pub const fn new(method: ColourMethod, image: SourceImage, paper_size: PaperSize) -> Self {
        Self {
            method,
            image,
            paper_size,
        }
    }

    /// Build from string options, validating against the enumerated domains.
    ///
    /// # Errors
    ///
    /// `ResourceError::InvalidOption` naming the option and its choices.
    pub fn from_options(options: &OptionSet) -> Result<Self, ResourceError> {
        let method = enum_option(
            options,
            "method",
            "black-white",
            "black-white, run-length-encoding, greyscale, colour",
            ColourMethod::parse,
        )?;
        let image = enum_option(
            options,
            "image",
            "fish",
            "fish, hot-air-balloon, boat, parrots",
            SourceImage::parse,
        )?;
        let paper_size = enum_option(options, "paper-size", "a4", "a4, letter", PaperSize::parse)?;
        Ok(Self::new(method, image, paper_size))
    }

    /// The source PNG file name. Run-length encoding reuses the
    /// black-and-white image.
    #[must_use]
    pub fn image_filename(&self) -> String {
        let method = match self.method {
            ColourMethod::RunLengthEncoding => ColourMethod::BlackWhite,
            other => other,
        };
        format!("{}-{}.png", self.image, method)
    }

    fn image_path(&self, env: &GeneratorEnv) -> PathBuf {
        env.static_dir
            .join("img/resources/pixel-painter")
            .join(self.image_filename())
    }
}

impl ResourceGenerator for PixelPainterGenerator {
    fn slug(&self) -> &'static str {
        Self::SLUG
    }

    fn subtitle(&self) -> String {
        format!(
            "{} - {} - {}",
            self.image.name(),
            self.method.name(),
            self.paper_size
        )
    }

    fn generate(&self, env: &GeneratorEnv) -> Result<Vec<Page>, ResourceError> {
        let path = self.image_path(env);
        if !path.is_file() {
            return Err(ResourceError::MissingFile { path });
        }
        let source = image::open(&path)?.to_rgb8();
        let (width, height) = source.dimensions();

        let column_pages = width.div_ceil(COLUMNS_PER_PAGE);
        let row_pages = height.div_ceil(ROWS_PER_PAGE);
        let grid = page_grid(column_pages, row_pages, self.image.index())?;
        tracing::debug!(
            image = %self.image,
            method = %self.method,
            pages = grid.len() * grid.first().map_or(0, Vec::len),
            "rasterizing pixel painter pages"
        );

        let mut pages = vec![Page::Html(html::grid_reference_page(
            &grid,
            self.image.as_str(),
            label_table(self.method),
        ))];

        let mut encodings = Vec::new();
        for span in page_spans(width, height, &grid) {
            let mut page = raster::new_page();
            raster::draw_grid(&mut page, span.columns, span.rows);

            if self.method == ColourMethod::RunLengthEncoding {
                let encoding = encode_page(&source, &span, self.image.as_str())?;
                encodings.push((span.reference.clone(), encoding));
            } else {
                raster::draw_pixel_labels(
                    &mut page,
                    &source,
                    &span,
                    self.method,
                    &env.fonts,
                    self.image.as_str(),
                )?;
            }

            raster::draw_page_reference(&mut page, &source, &span, &env.fonts);
            pages.push(Page::Image(page));
        }

        if self.method == ColourMethod::RunLengthEncoding {
            pages.insert(1, Page::Html(html::run_length_encoding_page(&encodings)));
        }
        Ok(pages)
    }

    fn thumbnail_source(&self, env: &GeneratorEnv) -> PathBuf {
        self.image_path(env)
    }
}
