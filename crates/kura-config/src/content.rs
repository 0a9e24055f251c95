//! Content and static file location configuration.

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    "content".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

/// Where the loaders find structure files, markdown, and static images.
///
/// Relative paths are resolved against the project root (the directory
/// holding `.kura/`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Directory containing `structure.yml` and the content tree.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Directory containing static assets (resource source images, fonts,
    /// thumbnails).
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            static_dir: default_static_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ContentConfig::default();
        assert_eq!(config.dir, "content");
        assert_eq!(config.static_dir, "static");
    }
}
