//! Scramble - CLI
//!
//! Letter-scramble word game: ten letters hide a ten-letter word, every
//! dictionary word they spell scores points.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scramble::{
    catalog::{GENERATING, SEARCHING, WordCatalog, loader},
    commands::{run_check, run_play},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scramble",
    about = "Letter-scramble word game with dictionary validation and hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed-word list file (10-letter words); defaults to the embedded list
    #[arg(short = 'g', long, global = true)]
    generating: Option<PathBuf>,

    /// Dictionary file for validation and hints; defaults to the embedded list
    #[arg(short = 'd', long, global = true)]
    searching: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play mode (default)
    Play,

    /// Check whether a word is a valid guess
    Check {
        /// Word to check
        word: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let catalog = load_catalog(&cli)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&catalog),
        Commands::Check { word } => {
            run_check(&catalog, &word);
            Ok(())
        }
    }
}

/// Build the catalog from the embedded lists or from `-g`/`-d` overrides
fn load_catalog(cli: &Cli) -> Result<WordCatalog> {
    let generating = match &cli.generating {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("reading seed-word list {}", path.display()))?,
        None => loader::words_from_slice(GENERATING),
    };

    let searching = match &cli.searching {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("reading dictionary {}", path.display()))?,
        None => loader::words_from_slice(SEARCHING),
    };

    WordCatalog::new(generating, searching).context("building word catalog")
}
