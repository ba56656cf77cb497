pub mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "concord")]
#[command(about = "A scripture reference knowledge base", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up commentary for a verse
    Commentary {
        /// Book slug, e.g. "john" or "1-peter"
        book: String,
        chapter: u32,
        verse: u32,
    },
    /// List the curated verse collections
    Collections,
    /// Show one collection
    Collection {
        /// Collection slug, e.g. "anxiety"
        slug: String,
        /// Only verses tagged with this theme slug
        #[arg(long)]
        theme: Option<String>,
        /// Show derived statistics instead of the verses
        #[arg(long)]
        stats: bool,
    },
    /// List topics
    Topics,
    /// Show a topic
    Topic {
        /// Topic slug, e.g. "peace"
        slug: String,
        /// Include the full verse list
        #[arg(long)]
        verses: bool,
    },
    /// Show the verse of the day
    Daily {
        /// Date to select for (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show a book outline, or the section containing a chapter
    Outline {
        /// Book slug, e.g. "genesis"
        book: String,
        /// Show only the section containing this chapter
        #[arg(long)]
        chapter: Option<u32>,
    },
}
