use crate::errors::{BuildError, EncodeError, InvalidCardError, PersistError};

#[derive(Clone, Debug)]
pub enum SkipReason {
    /// The card failed validation and never reached an encoder.
    Invalid(InvalidCardError),
    /// The batch's encoder rejected the card.
    Encode {
        front: String,
        back: String,
        error: EncodeError,
    },
}

#[derive(Clone, Debug)]
pub struct SkippedCard {
    /// 1-based position within the whole card set.
    pub position: usize,
    pub reason: SkipReason,
}

/// Outcome of one fully processed batch.
#[derive(Clone, Debug)]
pub struct BatchResult {
    pub batch_index: usize,
    pub start: usize,
    pub end: usize,
    /// Target file name, computed once at least one card was encoded. Set
    /// even when persisting then failed; `written_file` accounts for that.
    pub file_name: Option<String>,
    pub cards_added: usize,
    pub skipped: Vec<SkippedCard>,
    pub persist_error: Option<PersistError>,
}

impl BatchResult {
    pub fn written_file(&self) -> Option<&str> {
        if self.persist_error.is_some() {
            None
        } else {
            self.file_name.as_deref()
        }
    }
}

/// Everything that happened while building one deck.
#[derive(Clone, Debug)]
pub struct DeckReport {
    pub deck_name: String,
    pub data_source: String,
    pub total_cards: usize,
    pub batch_size: usize,
    pub total_batches: usize,
    pub batches: Vec<BatchResult>,
}

impl DeckReport {
    pub fn cards_added(&self) -> usize {
        self.batches.iter().map(|b| b.cards_added).sum()
    }

    pub fn cards_skipped(&self) -> usize {
        self.batches.iter().map(|b| b.skipped.len()).sum()
    }

    pub fn files_written(&self) -> Vec<&str> {
        self.batches.iter().filter_map(|b| b.written_file()).collect()
    }
}

/// One deck's result within a run, in input order. A failed deck never stops
/// the decks after it, so a run yields one outcome per spec.
#[derive(Clone, Debug)]
pub struct DeckOutcome {
    /// 1-based position among the run's specs.
    pub position: usize,
    pub result: Result<DeckReport, BuildError>,
}
