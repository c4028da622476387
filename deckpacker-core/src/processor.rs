use crate::builder::DeckBuilder;
use crate::collab::{CardSource, EncoderFactory, PackageSink};
use crate::errors::RunError;
use crate::models::DeckSpec;
use crate::report::DeckOutcome;
use tracing::{error, info};

/// Runs a sequence of deck specs through the builder, strictly in order and
/// one at a time. A deck that aborts leaves its error in the outcome list and
/// never stops the decks after it.
pub struct DeckSetProcessor<'a> {
    builder: DeckBuilder<'a>,
}

impl<'a> DeckSetProcessor<'a> {
    pub fn new(
        source: &'a dyn CardSource,
        encoders: &'a dyn EncoderFactory,
        sink: &'a dyn PackageSink,
    ) -> Self {
        Self {
            builder: DeckBuilder::new(source, encoders, sink),
        }
    }

    pub async fn run(&self, specs: &[DeckSpec]) -> Result<Vec<DeckOutcome>, RunError> {
        if specs.is_empty() {
            return Err(RunError::NoDecks);
        }
        let total = specs.len();
        let mut outcomes = Vec::with_capacity(total);
        for (i, spec) in specs.iter().enumerate() {
            let position = i + 1;
            info!(deck = position, total, "processing deck");
            let result = self.builder.build(spec).await;
            if let Err(err) = &result {
                error!(deck = position, %err, "deck aborted");
            }
            outcomes.push(DeckOutcome { position, result });
        }
        Ok(outcomes)
    }
}
