//! Post and document models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::FrontMatter;

/// One entry from the post index (`posts.json`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Source file name under the pages directory, unique key
    pub file: String,

    /// Post title
    pub title: String,

    /// Short excerpt shown in listings
    pub excerpt: String,

    /// Publication date as written in the index (ISO-formatted)
    pub date: String,

    /// Optional category
    #[serde(default)]
    pub category: Option<String>,

    /// Post tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// Parse the date string into a calendar date
    pub fn parse_date(&self) -> Option<NaiveDate> {
        parse_date_string(&self.date)
    }
}

/// A fully loaded post document: metadata, raw body, and rendered HTML
#[derive(Debug, Clone)]
pub struct Document {
    /// Parsed front-matter
    pub meta: FrontMatter,

    /// Raw markdown body
    pub raw: String,

    /// Rendered HTML content
    pub content: String,
}

impl Document {
    /// Title from front-matter, falling back to a fixed placeholder
    pub fn title(&self) -> &str {
        self.meta.title().unwrap_or("Untitled")
    }

    /// Publication date from front-matter, if present and parseable
    pub fn parse_date(&self) -> Option<NaiveDate> {
        self.meta.date().and_then(parse_date_string)
    }
}

/// Parse a date string in the formats the index uses in practice
fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

    for fmt in formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // Full timestamps with an offset
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_index_entry() {
        let json = r#"{
            "file": "first-post.md",
            "title": "First Post",
            "excerpt": "An opening note",
            "date": "2024-01-15",
            "category": "notes",
            "tags": ["blog", "meta"]
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.file, "first-post.md");
        assert_eq!(post.tags, ["blog", "meta"]);
        assert_eq!(post.parse_date(), NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "file": "bare.md",
            "title": "Bare",
            "excerpt": "",
            "date": "2023/06/02"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.category, None);
        assert!(post.tags.is_empty());
        assert_eq!(post.parse_date(), NaiveDate::from_ymd_opt(2023, 6, 2));
    }

    #[test]
    fn test_unparseable_date() {
        let post = Post {
            file: "x.md".into(),
            title: String::new(),
            excerpt: String::new(),
            date: "someday".into(),
            category: None,
            tags: Vec::new(),
        };
        assert_eq!(post.parse_date(), None);
    }

    #[test]
    fn test_rfc3339_date() {
        let post = Post {
            file: "x.md".into(),
            title: String::new(),
            excerpt: String::new(),
            date: "2024-05-01T09:30:00+09:00".into(),
            category: None,
            tags: Vec::new(),
        };
        assert_eq!(post.parse_date(), NaiveDate::from_ymd_opt(2024, 5, 1));
    }
}
