use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use concord::app::KnowledgeBase;
use concord::cli::{commands, Cli, Commands};
use concord::config::Config;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let kb = KnowledgeBase::new(config)?;

    match cli.command {
        Commands::Commentary {
            book,
            chapter,
            verse,
        } => {
            commands::show_commentary(&kb, &book, chapter, verse)?;
        }
        Commands::Collections => {
            commands::list_collections(&kb)?;
        }
        Commands::Collection { slug, theme, stats } => {
            commands::show_collection(&kb, &slug, theme.as_deref(), stats)?;
        }
        Commands::Topics => {
            commands::list_topics(&kb)?;
        }
        Commands::Topic { slug, verses } => {
            commands::show_topic(&kb, &slug, verses)?;
        }
        Commands::Daily { date } => {
            commands::show_daily(&kb, date)?;
        }
        Commands::Outline { book, chapter } => {
            commands::show_outline(&kb, &book, chapter)?;
        }
    }

    Ok(())
}
