//! Content loader - reads the post index and individual post documents

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use super::{Document, FrontMatter, MarkdownRenderer, Post};
use crate::Blog;

/// A failed load of the index or a post document.
///
/// Load failures are terminal for the operation that triggered them: the
/// caller reports them and does not retry.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read post index {path}: {source}")]
    IndexUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed post index {path}: {source}")]
    IndexMalformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot read post document {path}: {source}")]
    DocumentUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Loads blog content from the blog directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    pub fn new(blog: &'a Blog) -> Self {
        let renderer = MarkdownRenderer::with_highlight(blog.config.highlight.enable);
        Self { blog, renderer }
    }

    /// Load the post index (`posts.json`)
    pub fn load_index(&self) -> Result<Vec<Post>, LoadError> {
        let path = &self.blog.index_path;
        let raw = fs::read_to_string(path).map_err(|source| LoadError::IndexUnreadable {
            path: path.clone(),
            source,
        })?;

        let posts: Vec<Post> =
            serde_json::from_str(&raw).map_err(|source| LoadError::IndexMalformed {
                path: path.clone(),
                source,
            })?;

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), path);
        Ok(posts)
    }

    /// Load and render a single post document from the pages directory
    pub fn load_document(&self, file: &str) -> Result<Document, LoadError> {
        let path = self.blog.pages_dir.join(file);
        let raw = fs::read_to_string(&path).map_err(|source| LoadError::DocumentUnreadable {
            path: path.clone(),
            source,
        })?;

        let (meta, body) = FrontMatter::parse(&raw);
        if meta.is_empty() {
            tracing::warn!("No front-matter found in {:?}", path);
        }

        // Rendering failures do not exist for plain markdown input, but the
        // renderer keeps a Result signature; degrade to the raw body.
        let content = self.renderer.render(body).unwrap_or_else(|e| {
            tracing::warn!("Failed to render {:?}: {}", path, e);
            body.to_string()
        });

        Ok(Document {
            meta,
            raw: body.to_string(),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn blog_in(dir: &std::path::Path) -> Blog {
        Blog::new(dir).unwrap()
    }

    fn write_file(dir: &std::path::Path, name: &str, content: &str) {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut f = fs::File::create(path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_load_index_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "posts.json",
            r#"[{"file":"hello.md","title":"Hello","excerpt":"hi","date":"2024-01-01","tags":["intro"]}]"#,
        );

        let blog = blog_in(dir.path());
        let loader = ContentLoader::new(&blog);
        let posts = loader.load_index().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello");
        assert_eq!(posts[0].tags, ["intro"]);
    }

    #[test]
    fn test_missing_index_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_in(dir.path());
        let loader = ContentLoader::new(&blog);
        assert!(matches!(
            loader.load_index(),
            Err(LoadError::IndexUnreadable { .. })
        ));
    }

    #[test]
    fn test_malformed_index_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "posts.json", "{not json");
        let blog = blog_in(dir.path());
        let loader = ContentLoader::new(&blog);
        assert!(matches!(
            loader.load_index(),
            Err(LoadError::IndexMalformed { .. })
        ));
    }

    #[test]
    fn test_load_document() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "pages/hello.md",
            "---\ntitle: Hello\ntags: [\"intro\"]\n---\n# Heading\n\nBody.\n",
        );

        let blog = blog_in(dir.path());
        let loader = ContentLoader::new(&blog);
        let doc = loader.load_document("hello.md").unwrap();
        assert_eq!(doc.title(), "Hello");
        assert_eq!(doc.meta.tags(), ["intro"]);
        assert!(doc.content.contains("<h1>Heading</h1>"));
        assert!(doc.raw.contains("# Heading"));
    }

    #[test]
    fn test_missing_document_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_in(dir.path());
        let loader = ContentLoader::new(&blog);
        assert!(matches!(
            loader.load_document("absent.md"),
            Err(LoadError::DocumentUnreadable { .. })
        ));
    }
}
