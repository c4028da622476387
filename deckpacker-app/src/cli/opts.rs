use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "deckpacker", version, about = "Batch JSON flashcards into Anki .apkg packages")]
pub struct Cli {
    /// Run configuration file
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// Directory holding the card data files
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory the .apkg packages are written to
    #[arg(long, default_value = "apkg")]
    pub out_dir: PathBuf,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process every deck in the run configuration
    Run {
        /// Validate and encode but write nothing
        #[arg(long)]
        dry_run: bool,
    },
    /// Build a single deck without a configuration file
    Deck(DeckArgs),
}

#[derive(Debug, Args)]
pub struct DeckArgs {
    /// Card data file inside the data directory
    #[arg(long)]
    pub data: String,

    /// Deck name
    #[arg(long)]
    pub name: String,

    /// Cards per package
    #[arg(long)]
    pub batch_size: Option<u32>,

    /// Validate and encode but write nothing
    #[arg(long)]
    pub dry_run: bool,
}
