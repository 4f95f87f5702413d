//! Lightweight front-matter parsing
//!
//! Post documents may start with a metadata block delimited by `---` lines.
//! Parsing is best-effort by design: malformed lines are skipped and a
//! malformed tag list degrades to a manual comma split, so this module never
//! returns an error.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// Matches a front-matter block at the very start of a document.
    /// Accepts both `\n` and `\r\n` line endings.
    static ref FRONT_MATTER: Regex =
        Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---\r?\n(.*)\z").unwrap();
}

/// A single front-matter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    /// Plain string value
    Scalar(String),
    /// List of strings (only produced for the `tags` key)
    List(Vec<String>),
}

/// Parsed front-matter mapping from a post document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: HashMap<String, MetaValue>,
}

impl FrontMatter {
    /// Parse front-matter from a document.
    /// Returns the metadata mapping and the remaining body, verbatim.
    ///
    /// A leading UTF-8 BOM is stripped first. If no block is present at the
    /// start of the document, the mapping is empty and the body is the whole
    /// (BOM-stripped) input.
    pub fn parse(content: &str) -> (Self, &str) {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let Some(caps) = FRONT_MATTER.captures(content) else {
            return (FrontMatter::default(), content);
        };

        let block = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let body = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        let mut fields = HashMap::new();
        for line in block.lines() {
            // Split on the first colon; lines without one are not key-value
            // pairs and are skipped, as is a colon at position 0.
            let Some(colon) = line.find(':') else { continue };
            if colon == 0 {
                continue;
            }

            let key = line[..colon].trim().to_string();
            let raw = strip_quotes(line[colon + 1..].trim());

            let value = if key == "tags" && raw.starts_with('[') && raw.ends_with(']') {
                MetaValue::List(parse_tag_list(raw))
            } else {
                MetaValue::Scalar(raw.to_string())
            };

            fields.insert(key, value);
        }

        (FrontMatter { fields }, body)
    }

    /// Look up a scalar field
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.fields.get(key) {
            Some(MetaValue::Scalar(s)) => Some(s),
            _ => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn date(&self) -> Option<&str> {
        self.get("date")
    }

    pub fn category(&self) -> Option<&str> {
        self.get("category")
    }

    /// The parsed tag list, empty when `tags` is absent or was a scalar
    pub fn tags(&self) -> &[String] {
        match self.fields.get("tags") {
            Some(MetaValue::List(tags)) => tags,
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Strip exactly one matching pair of surrounding quotes
fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 {
        let quoted = (value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\''));
        if quoted {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse a bracketed tag list such as `["rust", "blog"]`.
///
/// Tries a structured JSON parse first and falls back to splitting on commas.
/// The fallback does not handle commas inside quoted tags, strips a leading
/// and a trailing quote independently, and keeps empty elements; that matches
/// the original behavior and is accepted as a known limitation.
fn parse_tag_list(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(tags) => tags,
        Err(e) => {
            tracing::warn!(
                "Malformed tag list {:?}, falling back to comma split: {}",
                raw,
                e
            );
            raw[1..raw.len() - 1]
                .split(',')
                .map(|tag| strip_edge_quotes(tag.trim()).to_string())
                .collect()
        }
    }
}

/// Strip one leading and one trailing quote, each independently
fn strip_edge_quotes(tag: &str) -> &str {
    let is_quote = |c: char| c == '"' || c == '\'';
    let tag = tag.strip_prefix(is_quote).unwrap_or(tag);
    tag.strip_suffix(is_quote).unwrap_or(tag)
}
