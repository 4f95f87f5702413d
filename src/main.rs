//! CLI entry point for blogview

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blogview")]
#[command(version)]
#[command(about = "A command-line viewer for markdown blogs", long_about = None)]
struct Cli {
    /// Set the blog directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts from the index
    #[command(alias = "ls")]
    List {
        /// Only show posts carrying this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Search posts by title, excerpt, or tag
    #[command(alias = "s")]
    Search {
        /// Search query (case-insensitive substring)
        query: String,
    },

    /// List all tags with post counts
    Tags,

    /// Render a single post document
    Show {
        /// Post file name under the pages directory
        file: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogview=debug,info"
    } else {
        "blogview=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine blog directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());
    let blog = blogview::Blog::new(&base_dir)?;

    match cli.command {
        Commands::List { tag } => {
            blogview::commands::list::run(&blog, tag.as_deref())?;
        }

        Commands::Search { query } => {
            tracing::debug!("Searching for {:?}", query);
            blogview::commands::search::run(&blog, &query)?;
        }

        Commands::Tags => {
            blogview::commands::tags::run(&blog)?;
        }

        Commands::Show { file } => {
            tracing::debug!("Rendering {}", file);
            blogview::commands::show::run(&blog, &file)?;
        }
    }

    Ok(())
}
