//! Page rasterization: blank pages, grids, labels, page references.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_line_segment_mut, draw_text_mut, text_size};

use crate::error::ResourceError;
use crate::generator::PageFonts;

use super::grid::PageSpan;
use super::labels::pixel_label;
use super::{BOX_SIZE, ColourMethod, LABEL_SCALE, PAGE_HEIGHT, PAGE_WIDTH, REFERENCE_SCALE};

const WHITE: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
const BLACK: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);
const LINE_COLOUR: Rgb<u8> = Rgb([0x66, 0x66, 0x66]);
const TEXT_COLOUR: Rgb<u8> = Rgb([0x88, 0x88, 0x88]);
const LINE_WIDTH: u32 = 1;

/// A blank page at full page size.
#[must_use]
pub fn new_page() -> RgbImage {
    RgbImage::from_pixel(PAGE_WIDTH, PAGE_HEIGHT, WHITE)
}

/// Draw the box grid for a (possibly partial) page.
///
/// Interior lines sit on box boundaries; the far edge lines are drawn one
/// pixel inside the grid so they stay visible.
pub fn draw_grid(page: &mut RgbImage, columns: u32, rows: u32) {
    let grid_width = (columns * BOX_SIZE) as f32;
    let grid_height = (rows * BOX_SIZE) as f32;

    for x in (0..columns * BOX_SIZE).step_by(BOX_SIZE as usize) {
        draw_line_segment_mut(page, (x as f32, 0.0), (x as f32, grid_height), LINE_COLOUR);
    }
    draw_line_segment_mut(
        page,
        (grid_width - 1.0, 0.0),
        (grid_width - 1.0, grid_height),
        LINE_COLOUR,
    );

    for y in (0..rows * BOX_SIZE).step_by(BOX_SIZE as usize) {
        draw_line_segment_mut(page, (0.0, y as f32), (grid_width, y as f32), LINE_COLOUR);
    }
    draw_line_segment_mut(
        page,
        (0.0, grid_height - 1.0),
        (grid_width, grid_height - 1.0),
        LINE_COLOUR,
    );
}

/// Write each source pixel's binary label centered in its box.
///
/// # Errors
///
/// `ResourceError::UnrecognisedPixel` when a pixel is not in the method's
/// label table.
pub fn draw_pixel_labels(
    page: &mut RgbImage,
    source: &RgbImage,
    span: &PageSpan,
    method: ColourMethod,
    fonts: &PageFonts,
    image_name: &str,
) -> Result<(), ResourceError> {
    for row in 0..span.rows {
        for column in 0..span.columns {
            let pixel = *source.get_pixel(span.start_column + column, span.start_row + row);
            let text = pixel_label(method, pixel).ok_or_else(|| {
                ResourceError::UnrecognisedPixel {
                    image: image_name.to_string(),
                    method: method.as_str().to_string(),
                    pixel: pixel.0,
                }
            })?;

            let (text_width, text_height) = text_size(LABEL_SCALE, &fonts.font, text);
            let x = (column * BOX_SIZE + BOX_SIZE / 2) as i32 - (text_width as i32) / 2;
            let y = (row * BOX_SIZE + BOX_SIZE / 2) as i32 - (text_height as i32) / 2;
            draw_text_mut(page, TEXT_COLOUR, x, y, LABEL_SCALE, &fonts.font, text);
        }
    }
    Ok(())
}

/// Draw the page reference in the first box whose pixel is not black,
/// scanning row-major. A page of all black pixels gets no reference.
pub fn draw_page_reference(
    page: &mut RgbImage,
    source: &RgbImage,
    span: &PageSpan,
    fonts: &PageFonts,
) {
    for row in 0..span.rows {
        for column in 0..span.columns {
            let pixel = *source.get_pixel(span.start_column + column, span.start_row + row);
            if pixel != BLACK {
                draw_text_mut(
                    page,
                    BLACK,
                    (column * BOX_SIZE + LINE_WIDTH * 4) as i32,
                    (row * BOX_SIZE) as i32 - 4,
                    REFERENCE_SCALE,
                    &fonts.font,
                    &span.reference,
                );
                return;
            }
        }
    }
}
