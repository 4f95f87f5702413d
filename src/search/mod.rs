//! Post index and filter engine
//!
//! [`PostIndex`] owns the authoritative post collection for a session and
//! answers tag-filter and free-text search queries over it. The two filter
//! modes are mutually exclusive: selecting a tag drops any active search and
//! searching drops any active tag. Every filter operation fully replaces the
//! current filtered view.
//!
//! None of the operations here can fail; an empty collection or a query with
//! no matches is a normal empty result.

mod highlight;

pub use highlight::highlight;

use std::collections::HashSet;

use crate::content::Post;

/// Receives search results after each `perform_search` call.
///
/// The view layer subscribes a listener and re-renders from the filtered set
/// and originating query it is handed.
pub trait SearchListener {
    fn on_search_results(&mut self, posts: &[Post], query: &str);
}

/// In-memory post collection with tag and search filtering
#[derive(Default)]
pub struct PostIndex {
    posts: Vec<Post>,
    tags: HashSet<String>,
    active_tag: Option<String>,
    filtered: Vec<Post>,
    listeners: Vec<Box<dyn SearchListener>>,
}

impl PostIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the post collection and rebuild the tag set.
    ///
    /// Resets to the unfiltered state: the filtered view equals the full
    /// collection and no tag is active.
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.tags.clear();
        for post in &posts {
            for tag in &post.tags {
                self.tags.insert(tag.clone());
            }
        }
        self.filtered = posts.clone();
        self.posts = posts;
        self.active_tag = None;
    }

    /// The distinct tag set in ascending code-point order
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.tags.iter().cloned().collect();
        tags.sort();
        tags
    }

    /// The currently active tag filter, if any
    pub fn active_tag(&self) -> Option<&str> {
        self.active_tag.as_deref()
    }

    /// The current filtered view
    pub fn filtered(&self) -> &[Post] {
        &self.filtered
    }

    /// Filter the collection by a tag, preserving collection order.
    ///
    /// `None` or an empty tag means unfiltered: the view becomes the full
    /// collection. Any active search is dropped either way.
    pub fn filter_by_tag(&mut self, tag: Option<&str>) -> &[Post] {
        match tag {
            Some(tag) if !tag.is_empty() => {
                self.filtered = self
                    .posts
                    .iter()
                    .filter(|post| post.tags.iter().any(|t| t == tag))
                    .cloned()
                    .collect();
                self.active_tag = Some(tag.to_string());
            }
            _ => {
                self.filtered = self.posts.clone();
                self.active_tag = None;
            }
        }
        &self.filtered
    }

    /// Search titles, excerpts, and tags by case-insensitive substring.
    ///
    /// An empty or all-whitespace query yields the full collection. The
    /// active tag filter is cleared, and subscribed listeners are notified
    /// with the new view and the original query string.
    pub fn perform_search(&mut self, query: &str) -> &[Post] {
        let needle = query.trim().to_lowercase();

        self.filtered = if needle.is_empty() {
            self.posts.clone()
        } else {
            self.posts
                .iter()
                .filter(|post| post_matches(post, &needle))
                .cloned()
                .collect()
        };
        self.active_tag = None;

        for listener in &mut self.listeners {
            listener.on_search_results(&self.filtered, query);
        }

        &self.filtered
    }

    /// Subscribe a listener to search results
    pub fn subscribe(&mut self, listener: Box<dyn SearchListener>) {
        self.listeners.push(listener);
    }
}

/// Substring containment against title, excerpt, or any tag.
/// `needle` must already be trimmed and lowercased.
fn post_matches(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle)
        || post.excerpt.to_lowercase().contains(needle)
        || post.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}
