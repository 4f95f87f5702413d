//! Render a single post document

use anyhow::Result;

use crate::Blog;

pub fn run(blog: &Blog, file: &str) -> Result<()> {
    let doc = blog.load_document(file)?;

    println!("{}", doc.title());

    if let Some(date) = doc.parse_date() {
        println!("{}", date.format(&blog.config.date_format));
    } else if let Some(raw) = doc.meta.date() {
        println!("{}", raw);
    }

    if let Some(category) = doc.meta.category() {
        println!("Category: {}", category);
    }
    if !doc.meta.tags().is_empty() {
        println!("Tags: {}", doc.meta.tags().join(", "));
    }

    println!();
    println!("{}", doc.content);

    Ok(())
}
