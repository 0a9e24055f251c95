//! Resource generation configuration.

use serde::{Deserialize, Serialize};

fn default_output_dir() -> String {
    "build/resources".to_string()
}

fn default_font_path() -> String {
    "static/fonts/PatrickHand-Regular.ttf".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourcesConfig {
    /// Directory generated resource pages are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// TTF font used for labels on rasterized pages.
    #[serde(default = "default_font_path")]
    pub font_path: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            font_path: default_font_path(),
        }
    }
}
