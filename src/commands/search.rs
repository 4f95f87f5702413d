//! Search posts and print highlighted results
//!
//! The printer is wired in as a search listener, so it receives the filtered
//! set and the originating query the same way any other consumer of the
//! engine would.

use anyhow::Result;

use crate::content::Post;
use crate::search::{highlight, PostIndex, SearchListener};
use crate::Blog;

pub fn run(blog: &Blog, query: &str) -> Result<()> {
    let posts = blog.load_index()?;

    let mut index = PostIndex::new();
    index.set_posts(posts);
    index.subscribe(Box::new(ConsolePrinter {
        date_format: blog.config.date_format.clone(),
    }));

    index.perform_search(query);
    Ok(())
}

/// Prints search results to stdout with `<mark>` markers around matches
struct ConsolePrinter {
    date_format: String,
}

impl SearchListener for ConsolePrinter {
    fn on_search_results(&mut self, posts: &[Post], query: &str) {
        if posts.is_empty() {
            println!("No posts match '{}'.", query.trim());
            return;
        }

        println!("Results for '{}' ({}):", query.trim(), posts.len());
        for post in posts {
            let date = post
                .parse_date()
                .map(|d| d.format(&self.date_format).to_string())
                .unwrap_or_else(|| post.date.clone());

            println!(
                "  {} - {} [{}]",
                date,
                highlight(&post.title, query),
                post.file
            );
            if !post.excerpt.is_empty() {
                println!("      {}", highlight(&post.excerpt, query));
            }
            if !post.tags.is_empty() {
                println!("      tags: {}", highlight(&post.tags.join(", "), query));
            }
        }
    }
}
