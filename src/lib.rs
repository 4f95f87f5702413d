//! blogview: a command-line viewer for markdown blogs
//!
//! This crate loads a JSON post index plus individual markdown post documents
//! with lightweight front-matter, and provides in-memory search, tag
//! filtering, and rendered post output.

pub mod commands;
pub mod config;
pub mod content;
pub mod search;

use anyhow::Result;
use std::path::Path;

use content::{ContentLoader, Document, LoadError, Post};

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding the post documents
    pub pages_dir: std::path::PathBuf,
    /// Path of the post index file
    pub index_path: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        let pages_dir = base_dir.join(&config.pages_dir);
        let index_path = base_dir.join(&config.index_file);

        Ok(Self {
            config,
            base_dir,
            pages_dir,
            index_path,
        })
    }

    /// Load the post index
    pub fn load_index(&self) -> Result<Vec<Post>, LoadError> {
        ContentLoader::new(self).load_index()
    }

    /// Load and render a single post document
    pub fn load_document(&self, file: &str) -> Result<Document, LoadError> {
        ContentLoader::new(self).load_document(file)
    }
}
