//! Generator registry.
//!
//! Generators are addressed by slug; the resource loader validates
//! `resources.yml` against this registry and the CLI resolves generators
//! through it.

use crate::error::ResourceError;
use crate::generator::ResourceGenerator;
use crate::options::OptionSet;
use crate::pixel_painter::PixelPainterGenerator;

/// Slugs of every registered generator.
pub const REGISTERED: &[&str] = &[PixelPainterGenerator::SLUG];

/// Whether a generator slug is registered.
#[must_use]
pub fn is_registered(slug: &str) -> bool {
    REGISTERED.contains(&slug)
}

/// Construct a generator by slug, validating the given options.
///
/// # Errors
///
/// `ResourceError::UnknownGenerator` for an unregistered slug, or the
/// generator's own option validation errors.
pub fn create_generator(
    slug: &str,
    options: &OptionSet,
) -> Result<Box<dyn ResourceGenerator>, ResourceError> {
    match slug {
        PixelPainterGenerator::SLUG => {
            Ok(Box::new(PixelPainterGenerator::from_options(options)?))
        }
        _ => Err(ResourceError::UnknownGenerator {
            slug: slug.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_painter_is_registered() {
        assert!(is_registered("pixel-painter"));
        assert!(!is_registered("word-search"));
    }

    #[test]
    fn create_resolves_registered_slug() {
        let generator = create_generator("pixel-painter", &OptionSet::new()).unwrap();
        assert_eq!(generator.slug(), "pixel-painter");
    }

    #[test]
    fn create_rejects_unknown_slug() {
        let result = create_generator("word-search", &OptionSet::new());
        assert!(matches!(
            result,
            Err(ResourceError::UnknownGenerator { .. })
        ));
    }

    #[test]
    fn create_propagates_option_errors() {
        let mut options = OptionSet::new();
        options.set("image", "whale");
        let result = create_generator("pixel-painter", &options);
        assert!(matches!(result, Err(ResourceError::InvalidOption { .. })));
    }
}
