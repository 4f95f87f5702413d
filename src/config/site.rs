//! Blog configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Site
    pub title: String,
    pub author: String,
    pub language: String,

    // Directory
    pub pages_dir: String,
    pub index_file: String,

    // Display
    pub date_format: String,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self { enable: true }
    }
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            author: String::new(),
            language: "en".to_string(),

            pages_dir: "pages".to_string(),
            index_file: "posts.json".to_string(),

            date_format: "%Y-%m-%d".to_string(),
            highlight: HighlightConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BlogConfig::default();
        assert_eq!(config.pages_dir, "pages");
        assert_eq!(config.index_file, "posts.json");
        assert!(config.highlight.enable);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: BlogConfig = serde_yaml::from_str("title: My Blog\n").unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_unknown_keys_retained() {
        let config: BlogConfig =
            serde_yaml::from_str("title: T\ntheme: dark\n").unwrap();
        assert!(config.extra.contains_key("theme"));
    }

    #[test]
    fn test_highlight_toggle() {
        let config: BlogConfig =
            serde_yaml::from_str("highlight:\n  enable: false\n").unwrap();
        assert!(!config.highlight.enable);
    }
}
