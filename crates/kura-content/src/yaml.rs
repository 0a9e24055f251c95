//! YAML structure-file reading.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ContentError;

/// Read a file to a string, distinguishing "missing" from other IO failures.
///
/// # Errors
///
/// `ContentError::MissingFile` when the path is not a file, `ContentError::Io`
/// for any other read failure.
pub fn read_file(path: &Path) -> Result<String, ContentError> {
    if !path.is_file() {
        return Err(ContentError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and deserialize a YAML structure file.
///
/// # Errors
///
/// File errors as [`read_file`]; `ContentError::Yaml` when the content does
/// not parse into `T`.
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let text = read_file(path)?;
    serde_yaml::from_str(&text).map_err(|source| ContentError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Unwrap an optional structure field, raising the typed missing-field error.
///
/// # Errors
///
/// `ContentError::MissingRequiredField` naming the structure file and field.
pub fn require<T>(value: Option<T>, path: &Path, field: &'static str) -> Result<T, ContentError> {
    value.ok_or_else(|| ContentError::MissingRequiredField {
        path: path.to_path_buf(),
        field,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::{read_yaml, require};
    use crate::error::ContentError;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn read_yaml_parses_map() {
        let file = write_temp("scissors: Scissors\ndice: Dice (6-sided)\n");
        let map: BTreeMap<String, String> = read_yaml(file.path()).expect("should parse");
        assert_eq!(map.len(), 2);
        assert_eq!(map["dice"], "Dice (6-sided)");
    }

    #[test]
    fn read_yaml_missing_file() {
        let result: Result<BTreeMap<String, String>, _> =
            read_yaml(std::path::Path::new("/no/such/structure.yml"));
        assert!(matches!(result, Err(ContentError::MissingFile { .. })));
    }

    #[test]
    fn read_yaml_invalid_yaml() {
        let file = write_temp("a: [unclosed\n");
        let result: Result<BTreeMap<String, String>, _> = read_yaml(file.path());
        assert!(matches!(result, Err(ContentError::Yaml { .. })));
    }

    #[test]
    fn require_present_and_missing() {
        let path = std::path::Path::new("topics/t.yml");
        assert_eq!(require(Some(5), path, "number").expect("present"), 5);

        let err = require::<u32>(None, path, "number").expect_err("missing");
        assert!(matches!(
            err,
            ContentError::MissingRequiredField { field: "number", .. }
        ));
    }
}
