use crate::batch::{self, Batch};
use crate::collab::{CardSource, EncoderFactory, PackageSink};
use crate::errors::{BuildError, PersistError};
use crate::models::DeckSpec;
use crate::report::{BatchResult, DeckReport, SkipReason, SkippedCard};
use crate::validate::{validate_card, validate_deck_name};
use tracing::{debug, info, warn};

pub const PACKAGE_EXTENSION: &str = "apkg";

/// A single-package deck keeps its plain name; a split deck gets a 1-based
/// `_part<N>` suffix per batch. Decided only once the batch count is known.
pub fn output_file_name(deck_name: &str, batch_index: usize, total_batches: usize) -> String {
    if total_batches > 1 {
        format!("{deck_name}_part{batch_index}.{PACKAGE_EXTENSION}")
    } else {
        format!("{deck_name}.{PACKAGE_EXTENSION}")
    }
}

/// Drives one deck spec through validation, batching, encoding, and
/// persistence, accumulating a report. Only precondition failures (missing
/// spec fields, unreadable source, invalid name, empty card set) abort the
/// deck; card, encode, and write failures are recorded and processing
/// continues.
pub struct DeckBuilder<'a> {
    source: &'a dyn CardSource,
    encoders: &'a dyn EncoderFactory,
    sink: &'a dyn PackageSink,
}

impl<'a> DeckBuilder<'a> {
    pub fn new(
        source: &'a dyn CardSource,
        encoders: &'a dyn EncoderFactory,
        sink: &'a dyn PackageSink,
    ) -> Self {
        Self {
            source,
            encoders,
            sink,
        }
    }

    pub async fn build(&self, spec: &DeckSpec) -> Result<DeckReport, BuildError> {
        // Empty strings in the configuration behave like absent fields.
        let data_source = spec.data_json.as_deref().filter(|s| !s.is_empty());
        let deck_name = spec.deck_name.as_deref().filter(|s| !s.is_empty());

        let (data_source, deck_name) = match (data_source, deck_name) {
            (None, None) => return Err(BuildError::MissingSourceAndName),
            (None, Some(name)) => {
                return Err(BuildError::MissingSource {
                    deck_name: name.to_string(),
                })
            }
            (Some(source), name) => (source, name),
        };

        let set = self
            .source
            .load(data_source)
            .await
            .map_err(|error| BuildError::SourceFailed {
                error,
                deck_name: deck_name.map(str::to_string),
            })?;

        let Some(deck_name) = deck_name else {
            return Err(BuildError::MissingName {
                data_source: data_source.to_string(),
            });
        };
        validate_deck_name(deck_name)?;

        if set.cards.is_empty() {
            return Err(BuildError::EmptySource {
                data_source: data_source.to_string(),
            });
        }

        let batch_size = spec.effective_batch_size();
        info!(
            deck = deck_name,
            cards = set.cards.len(),
            batch_size = batch_size.get(),
            "processing deck"
        );

        let batches = batch::split(&set.cards, batch_size);
        let total_batches = batches.len();
        let mut results = Vec::with_capacity(total_batches);
        for batch in &batches {
            results.push(self.process_batch(deck_name, batch, total_batches).await);
        }

        let report = DeckReport {
            deck_name: deck_name.to_string(),
            data_source: data_source.to_string(),
            total_cards: set.cards.len(),
            batch_size: batch_size.get(),
            total_batches,
            batches: results,
        };
        if report.total_batches > 1 {
            info!(
                deck = deck_name,
                files = report.files_written().len(),
                "deck was split into multiple packages"
            );
        }
        Ok(report)
    }

    async fn process_batch(
        &self,
        deck_name: &str,
        batch: &Batch<'_>,
        total_batches: usize,
    ) -> BatchResult {
        debug!(
            deck = deck_name,
            batch = batch.index,
            total = total_batches,
            first = batch.start + 1,
            last = batch.end,
            "processing batch"
        );
        let mut encoder = self.encoders.encoder_for(deck_name);
        let mut skipped = Vec::new();
        let mut cards_added = 0usize;

        for (offset, raw) in batch.cards.iter().enumerate() {
            let position = batch.start + offset + 1;
            let card = match validate_card(raw, position) {
                Ok(card) => card,
                Err(error) => {
                    warn!(deck = deck_name, card = position, %error, "skipping card");
                    skipped.push(SkippedCard {
                        position,
                        reason: SkipReason::Invalid(error),
                    });
                    continue;
                }
            };
            if let Err(error) = encoder.add_card(&card) {
                warn!(deck = deck_name, card = position, %error, "encoder rejected card");
                skipped.push(SkippedCard {
                    position,
                    reason: SkipReason::Encode {
                        front: card.front,
                        back: card.back,
                        error,
                    },
                });
                continue;
            }
            cards_added += 1;
        }

        // A batch with no valid cards writes no file; the skip records above
        // are the only trace of it.
        if cards_added == 0 {
            return BatchResult {
                batch_index: batch.index,
                start: batch.start,
                end: batch.end,
                file_name: None,
                cards_added: 0,
                skipped,
                persist_error: None,
            };
        }

        let file_name = output_file_name(deck_name, batch.index, total_batches);
        let persist_error = match encoder.finalize().await {
            Ok(payload) => match self.sink.persist(&file_name, &payload).await {
                Ok(()) => None,
                Err(error) => {
                    warn!(deck = deck_name, file = %file_name, %error, "could not persist batch");
                    Some(error)
                }
            },
            Err(error) => {
                warn!(deck = deck_name, file = %file_name, %error, "could not finalize batch");
                Some(PersistError {
                    file_name: file_name.clone(),
                    message: error.message,
                })
            }
        };

        BatchResult {
            batch_index: batch.index,
            start: batch.start,
            end: batch.end,
            file_name: Some(file_name),
            cards_added,
            skipped,
            persist_error,
        }
    }
}
