use deckpacker_core::{
    BuildError, DeckOutcome, DeckReport, SkipReason, EXPECTED_CONFIG_SHAPE, EXPECTED_DATA_SHAPE,
};
use std::path::Path;

pub fn no_decks(config_path: &Path) {
    println!(
        "Your {} doesn't match the correct structure!",
        config_path.display()
    );
    println!("{EXPECTED_CONFIG_SHAPE}");
}

pub fn deck_outcome(outcome: &DeckOutcome, total: usize) {
    println!("\n=== Processing deck {}/{} ===", outcome.position, total);
    match &outcome.result {
        Ok(report) => deck_report(report),
        Err(err) => build_error(err),
    }
}

fn build_error(err: &BuildError) {
    match err {
        BuildError::MissingSourceAndName => {
            println!("You must store a json file and a deck name in the config!");
        }
        BuildError::MissingSource { deck_name } => {
            println!("You must store a json file in the config! (Deck name: {deck_name})");
        }
        BuildError::MissingName { data_source } => {
            println!("You must store a deck name in the config! (Json file: {data_source})");
        }
        BuildError::InvalidName(e) => {
            println!("- Your deck name contains forbidden characters and/or words!");
            println!("| Forbidden characters: {}", join_chars(e.forbidden));
            println!("| Reserved names: {}", e.reserved.join(", "));
            println!("- Deck name: {}", e.name);
        }
        BuildError::SourceFailed { error, deck_name } => match deck_name {
            Some(name) => println!(
                "The json file '{}' could not be read! (Deck name: {name})",
                error.source
            ),
            None => println!("The json file '{}' could not be read!", error.source),
        },
        BuildError::EmptySource { data_source } => {
            println!("Your {data_source} doesn't match the correct structure!");
            println!("{EXPECTED_DATA_SHAPE}");
        }
    }
}

fn deck_report(report: &DeckReport) {
    println!(
        "Processing {} cards for deck: {}",
        report.total_cards, report.deck_name
    );
    println!("Using batch size: {}", report.batch_size);

    for batch in &report.batches {
        println!(
            "Processing batch {}/{} (cards {}-{})",
            batch.batch_index,
            report.total_batches,
            batch.start + 1,
            batch.end
        );

        for skip in &batch.skipped {
            match &skip.reason {
                SkipReason::Invalid(e) => {
                    println!("- Following card couldn't be added (missing front/back):");
                    println!("| Front: {}", e.front.as_deref().unwrap_or("<missing>"));
                    println!("| Back: {}", e.back.as_deref().unwrap_or("<missing>"));
                    println!("| Tags: {}", e.tags.join(", "));
                    println!("| Card number: {}", e.position);
                    println!("- Deck name: {}", report.deck_name);
                }
                SkipReason::Encode { front, back, error } => {
                    println!(
                        "- Something went wrong with card {}! (Deck name: {})",
                        skip.position, report.deck_name
                    );
                    println!("| Error: {error}");
                    println!("| Front: {front}");
                    println!("| Back: {back}");
                }
            }
        }

        if let Some(err) = &batch.persist_error {
            println!("- Error saving batch {}: {}", batch.batch_index, err.message);
        } else if let Some(file) = &batch.file_name {
            println!("✓ {} was generated with {} cards!", file, batch.cards_added);
        }
    }

    if report.total_batches > 1 {
        println!(
            "\n✓ Deck '{}' was split into {} files:",
            report.deck_name, report.total_batches
        );
        for file in report.files_written() {
            println!("  - {file}");
        }
        println!("\nTo import into Anki, import each file separately or combine them manually.");
    }
}

fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
