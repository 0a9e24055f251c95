//! Generator options.
//!
//! Options reach generators as string key/value pairs (from `-o key=value`
//! CLI flags or defaults) and are validated against enumerated domains with
//! typed errors, so a bad value is reported with the expected choices.

use std::collections::BTreeMap;

use crate::error::ResourceError;

/// String key/value options for a generator run.
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    values: BTreeMap<String, String>,
}

impl OptionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Parse `key=value` pairs (the CLI's `-o` flag).
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::InvalidOption` for a pair without `=`.
    pub fn parse_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<Self, ResourceError> {
        let mut options = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let Some((key, value)) = pair.split_once('=') else {
                return Err(ResourceError::InvalidOption {
                    name: "option",
                    value: pair.to_string(),
                    expected: "key=value".to_string(),
                });
            };
            options.set(key.trim(), value.trim());
        }
        Ok(options)
    }
}

/// Resolve an enumerated option: look up `name` in the set, fall back to
/// `default`, and parse with `parse` (which returns the allowed values on
/// failure via `expected`).
pub(crate) fn enum_option<T>(
    options: &OptionSet,
    name: &'static str,
    default: &str,
    expected: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ResourceError> {
    let raw = options.get(name).unwrap_or(default);
    parse(raw).ok_or_else(|| ResourceError::InvalidOption {
        name,
        value: raw.to_string(),
        expected: expected.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_pairs_roundtrip() {
        let options = OptionSet::parse_pairs(&["method=greyscale", "image = boat"]).unwrap();
        assert_eq!(options.get("method"), Some("greyscale"));
        assert_eq!(options.get("image"), Some("boat"));
        assert_eq!(options.get("paper-size"), None);
    }

    #[test]
    fn parse_pairs_rejects_bare_key() {
        let result = OptionSet::parse_pairs(&["method"]);
        assert!(matches!(
            result,
            Err(ResourceError::InvalidOption { name: "option", .. })
        ));
    }

    #[test]
    fn enum_option_uses_default_and_reports_domain() {
        let options = OptionSet::new();
        let value = enum_option(&options, "side", "left", "left, right", |raw| match raw {
            "left" => Some(1),
            "right" => Some(2),
            _ => None,
        })
        .unwrap();
        assert_eq!(value, 1);

        let mut options = OptionSet::new();
        options.set("side", "up");
        let err = enum_option(&options, "side", "left", "left, right", |raw| match raw {
            "left" => Some(1),
            "right" => Some(2),
            _ => None,
        })
        .unwrap_err();
        assert!(err.to_string().contains("left, right"));
    }
}
