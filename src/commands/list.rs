//! List posts, optionally filtered by tag

use anyhow::Result;

use crate::search::PostIndex;
use crate::Blog;

pub fn run(blog: &Blog, tag: Option<&str>) -> Result<()> {
    let posts = blog.load_index()?;

    let mut index = PostIndex::new();
    index.set_posts(posts);
    index.filter_by_tag(tag);

    let filtered = index.filtered();
    if filtered.is_empty() {
        match index.active_tag() {
            Some(tag) => println!("No posts tagged '{}'.", tag),
            None => println!("No posts."),
        }
        return Ok(());
    }

    match index.active_tag() {
        Some(tag) => println!("Posts tagged '{}' ({}):", tag, filtered.len()),
        None => println!("Posts ({}):", filtered.len()),
    }

    for post in filtered {
        let date = post
            .parse_date()
            .map(|d| d.format(&blog.config.date_format).to_string())
            .unwrap_or_else(|| post.date.clone());

        print!("  {} - {} [{}]", date, post.title, post.file);
        if let Some(category) = &post.category {
            print!(" <{}>", category);
        }
        if !post.tags.is_empty() {
            print!(" ({})", post.tags.join(", "));
        }
        println!();
    }

    Ok(())
}
