use std::fmt;
use thiserror::Error;

/// Minimal shape a data file must have, shown when a source has no cards.
pub const EXPECTED_DATA_SHAPE: &str = r#"{
    "cards": [
        {
            "front": "example",
            "back": "example",
            "tags": ["example"]
        }
    ]
}"#;

/// Minimal shape the run configuration must have, shown when no decks are
/// configured.
pub const EXPECTED_CONFIG_SHAPE: &str = r#"{
    "decks": [
        {
            "dataJson": "example.json",
            "deckName": "example",
            "batchSize": 50
        }
    ]
}"#;

#[derive(Clone, Debug, Error)]
#[error("deck name '{name}' contains forbidden characters and/or reserved words")]
pub struct InvalidNameError {
    pub name: String,
    pub forbidden: &'static [char],
    pub reserved: &'static [&'static str],
}

#[derive(Clone, Debug, Error)]
pub struct InvalidCardError {
    /// 1-based position within the whole card set, not the batch.
    pub position: usize,
    pub front: Option<String>,
    pub back: Option<String>,
    pub tags: Vec<String>,
}

impl InvalidCardError {
    pub fn missing_fields(&self) -> &'static str {
        let no_front = self.front.as_deref().unwrap_or("").is_empty();
        let no_back = self.back.as_deref().unwrap_or("").is_empty();
        match (no_front, no_back) {
            (true, true) => "front and back",
            (true, false) => "front",
            _ => "back",
        }
    }
}

impl fmt::Display for InvalidCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card {} is missing {}", self.position, self.missing_fields())
    }
}

// Note: the field is deliberately named `source` (the data source file name),
// which collides with thiserror's convention of treating a field named `source`
// as the `std::error::Error` source. A manual `Display`/`Error` impl avoids that
// collision while keeping the public field name and message identical.
#[derive(Clone, Debug)]
pub struct SourceError {
    pub source: String,
    pub message: String,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "card source '{}' could not be read: {}",
            self.source, self.message
        )
    }
}

impl std::error::Error for SourceError {}

#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct EncodeError {
    pub message: String,
}

#[derive(Clone, Debug, Error)]
#[error("could not write '{file_name}': {message}")]
pub struct PersistError {
    pub file_name: String,
    pub message: String,
}

/// Precondition failures that abort one deck before (or instead of) any batch
/// work. Per-card and per-batch failures are never errors at this level; they
/// are recorded inside the deck's report.
#[derive(Clone, Debug, Error)]
pub enum BuildError {
    #[error("deck spec has neither a data source nor a deck name")]
    MissingSourceAndName,
    #[error("deck '{deck_name}' has no data source")]
    MissingSource { deck_name: String },
    #[error("data source '{data_source}' has no deck name")]
    MissingName { data_source: String },
    #[error(transparent)]
    InvalidName(#[from] InvalidNameError),
    #[error("{error}")]
    SourceFailed {
        error: SourceError,
        deck_name: Option<String>,
    },
    #[error("data source '{data_source}' contains no cards")]
    EmptySource { data_source: String },
}

#[derive(Clone, Debug, Error)]
pub enum RunError {
    #[error("no decks are configured")]
    NoDecks,
}
