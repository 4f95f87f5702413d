//! List the distinct tag set

use anyhow::Result;

use crate::search::PostIndex;
use crate::Blog;

pub fn run(blog: &Blog) -> Result<()> {
    let posts = blog.load_index()?;

    let mut index = PostIndex::new();
    index.set_posts(posts.clone());

    let tags = index.tags();
    if tags.is_empty() {
        println!("No tags.");
        return Ok(());
    }

    println!("Tags ({}):", tags.len());
    for tag in tags {
        let count = posts.iter().filter(|p| p.tags.contains(&tag)).count();
        println!("  {} ({})", tag, count);
    }

    Ok(())
}
