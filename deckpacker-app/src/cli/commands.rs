use crate::cli::opts::{Cli, Command};
use crate::cli::render;

use anyhow::Result;
use deckpacker_apkg::ApkgEncoderFactory;
use deckpacker_core::memory::NullSink;
use deckpacker_core::{DeckSetProcessor, DeckSpec, PackageSink, RunError};
use deckpacker_json::{load_run_config, DirectorySink, JsonCardSource};

pub async fn run_cli(args: Cli) -> Result<()> {
    match &args.cmd {
        Command::Run { dry_run } => {
            let config = load_run_config(&args.config)?;
            run_specs(&args, config.decks, *dry_run).await
        }
        Command::Deck(deck) => {
            let spec = DeckSpec {
                data_json: Some(deck.data.clone()),
                deck_name: Some(deck.name.clone()),
                batch_size: deck.batch_size,
            };
            let dry_run = deck.dry_run;
            run_specs(&args, vec![spec], dry_run).await
        }
    }
}

async fn run_specs(args: &Cli, specs: Vec<DeckSpec>, dry_run: bool) -> Result<()> {
    let source = JsonCardSource::new(&args.data_dir);
    let encoders = ApkgEncoderFactory::new();
    let sink: Box<dyn PackageSink> = if dry_run {
        Box::new(NullSink)
    } else {
        Box::new(DirectorySink::new(&args.out_dir))
    };

    let processor = DeckSetProcessor::new(&source, &encoders, sink.as_ref());
    match processor.run(&specs).await {
        Ok(outcomes) => {
            for outcome in &outcomes {
                render::deck_outcome(outcome, specs.len());
            }
            Ok(())
        }
        Err(RunError::NoDecks) => {
            render::no_decks(&args.config);
            Ok(())
        }
    }
}
