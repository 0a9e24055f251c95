//! Slug derivation and validation.
//!
//! Slugs are the stable identifiers connecting structure files, markdown
//! content, and database rows. Loader cross-references (lesson → learning
//! outcome, lesson → resource, …) are resolved by slug.

/// Derive a slug from free text: lowercase ASCII alphanumerics with single
/// dashes between words.
///
/// Non-alphanumeric runs collapse to one dash; leading and trailing dashes
/// are stripped. `"Binary Numbers (5-7)"` becomes `"binary-numbers-5-7"`.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Check whether a string is already a valid slug.
///
/// Valid slugs are non-empty, contain only lowercase ASCII alphanumerics and
/// dashes, and neither start nor end with a dash.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c == '-' || c.is_ascii_lowercase() || c.is_ascii_digit())
        && !slug.contains("--")
}
