//! Run-length encoding of page rows.

use image::RgbImage;

use crate::error::ResourceError;

use super::grid::PageSpan;
use super::labels::pixel_label;
use super::ColourMethod;

/// Encode one row of labels as alternating run lengths.
///
/// Runs start with the count of white (`"0"`) pixels, so a row beginning
/// with black starts with a `0` count. `"0001"` encodes as `[3, 1]`,
/// `"1110"` as `[0, 3, 1]`.
#[must_use]
pub fn encode_row<'a, I>(labels: I) -> Vec<u32>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut encoding = Vec::new();
    let mut colour = "0";
    let mut count = 0u32;
    let mut any = false;

    for label in labels {
        any = true;
        if label != colour {
            encoding.push(count);
            colour = if colour == "0" { "1" } else { "0" };
            count = 0;
        }
        count += 1;
    }
    if any {
        encoding.push(count);
    }
    encoding
}

/// Run-length encode every row of a page span.
///
/// # Errors
///
/// `ResourceError::UnrecognisedPixel` when a pixel is outside the
/// black-and-white table.
pub fn encode_page(
    source: &RgbImage,
    span: &PageSpan,
    image_name: &str,
) -> Result<Vec<Vec<u32>>, ResourceError> {
    let method = ColourMethod::RunLengthEncoding;
    let mut rows = Vec::with_capacity(span.rows as usize);

    for row in 0..span.rows {
        let mut labels = Vec::with_capacity(span.columns as usize);
        for column in 0..span.columns {
            let pixel = *source.get_pixel(span.start_column + column, span.start_row + row);
            let label = pixel_label(method, pixel).ok_or_else(|| {
                ResourceError::UnrecognisedPixel {
                    image: image_name.to_string(),
                    method: method.as_str().to_string(),
                    pixel: pixel.0,
                }
            })?;
            labels.push(label);
        }
        rows.push(encode_row(labels));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use image::Rgb;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::super::grid::PageSpan;
    use super::*;

    #[rstest]
    #[case(vec!["0", "0", "0", "1"], vec![3, 1])]
    #[case(vec!["1", "1", "1", "0"], vec![0, 3, 1])]
    #[case(vec!["0", "0", "0", "0"], vec![4])]
    #[case(vec!["1"], vec![0, 1])]
    #[case(vec!["0", "1", "0", "1"], vec![1, 1, 1, 1])]
    #[case(vec![], vec![])]
    fn row_encodings(#[case] labels: Vec<&str>, #[case] expected: Vec<u32>) {
        assert_eq!(encode_row(labels), expected);
    }

    #[test]
    fn page_encoding_reads_span_offsets() {
        // 4×2 image: top row white-white-black-black, bottom row all black.
        let mut image = RgbImage::from_pixel(4, 2, Rgb([255, 255, 255]));
        image.put_pixel(2, 0, Rgb([0, 0, 0]));
        image.put_pixel(3, 0, Rgb([0, 0, 0]));
        for x in 0..4 {
            image.put_pixel(x, 1, Rgb([0, 0, 0]));
        }

        let span = PageSpan {
            start_column: 0,
            columns: 4,
            start_row: 0,
            rows: 2,
            reference: "0A1".to_string(),
        };
        let encoding = encode_page(&image, &span, "fish").unwrap();
        assert_eq!(encoding, vec![vec![2, 2], vec![0, 4]]);
    }

    #[test]
    fn unlabeled_pixel_is_an_error() {
        let image = RgbImage::from_pixel(1, 1, Rgb([90, 90, 90]));
        let span = PageSpan {
            start_column: 0,
            columns: 1,
            start_row: 0,
            rows: 1,
            reference: "0A1".to_string(),
        };
        let err = encode_page(&image, &span, "fish").unwrap_err();
        assert!(matches!(
            err,
            ResourceError::UnrecognisedPixel { pixel: [90, 90, 90], .. }
        ));
    }
}
