//! Pixel value → binary label tables.

use image::Rgb;

use super::ColourMethod;

/// The label table for a colouring method, in legend order.
///
/// Black-and-white and greyscale source images are decoded to RGB, so every
/// entry is a full RGB triple even for single-channel methods.
#[must_use]
pub const fn label_table(method: ColourMethod) -> &'static [(Rgb<u8>, &'static str)] {
    match method {
        ColourMethod::BlackWhite | ColourMethod::RunLengthEncoding => &[
            (Rgb([255, 255, 255]), "0"),
            (Rgb([0, 0, 0]), "1"),
        ],
        ColourMethod::Greyscale => &[
            (Rgb([255, 255, 255]), "00"),
            (Rgb([168, 168, 168]), "01"),
            (Rgb([84, 84, 84]), "10"),
            (Rgb([0, 0, 0]), "11"),
        ],
        ColourMethod::Colour => &[
            (Rgb([255, 255, 255]), "11111"), // White
            (Rgb([0, 0, 0]), "00000"),       // Black
            (Rgb([255, 0, 0]), "11000"),     // Red
            (Rgb([255, 143, 0]), "11100"),   // Orange
            (Rgb([255, 243, 0]), "11110"),   // Yellow
            (Rgb([76, 219, 5]), "00110"),    // Green
            (Rgb([0, 162, 255]), "00001"),   // Blue
            (Rgb([138, 0, 255]), "10001"),   // Purple
        ],
    }
}

/// Label for one pixel, or `None` when the value is not in the table.
#[must_use]
pub fn pixel_label(method: ColourMethod, pixel: Rgb<u8>) -> Option<&'static str> {
    label_table(method)
        .iter()
        .find(|(value, _)| *value == pixel)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ColourMethod::BlackWhite, Rgb([255, 255, 255]), "0")]
    #[case(ColourMethod::BlackWhite, Rgb([0, 0, 0]), "1")]
    #[case(ColourMethod::RunLengthEncoding, Rgb([255, 255, 255]), "0")]
    #[case(ColourMethod::Greyscale, Rgb([168, 168, 168]), "01")]
    #[case(ColourMethod::Greyscale, Rgb([84, 84, 84]), "10")]
    #[case(ColourMethod::Colour, Rgb([255, 143, 0]), "11100")]
    #[case(ColourMethod::Colour, Rgb([138, 0, 255]), "10001")]
    fn known_pixels_label(
        #[case] method: ColourMethod,
        #[case] pixel: Rgb<u8>,
        #[case] expected: &str,
    ) {
        assert_eq!(pixel_label(method, pixel), Some(expected));
    }

    #[test]
    fn unknown_pixel_has_no_label() {
        assert_eq!(pixel_label(ColourMethod::BlackWhite, Rgb([128, 128, 128])), None);
        assert_eq!(pixel_label(ColourMethod::Colour, Rgb([1, 2, 3])), None);
    }

    #[test]
    fn colour_table_has_eight_values() {
        assert_eq!(label_table(ColourMethod::Colour).len(), 8);
        assert_eq!(label_table(ColourMethod::Greyscale).len(), 4);
        assert_eq!(label_table(ColourMethod::BlackWhite).len(), 2);
    }

    #[test]
    fn labels_are_distinct_per_method() {
        for method in ColourMethod::ALL {
            let table = label_table(method);
            for (i, (_, a)) in table.iter().enumerate() {
                for (_, b) in &table[i + 1..] {
                    assert_ne!(a, b, "duplicate label in {method:?}");
                }
            }
        }
    }
}
