use serde::Deserialize;
use std::num::NonZeroUsize;

pub const DEFAULT_BATCH_SIZE: NonZeroUsize = match NonZeroUsize::new(50) {
    Some(n) => n,
    None => panic!("default batch size must be non-zero"),
};

/// Card shape as it appears in a data file. Presence of `front` and `back` is
/// checked once, in `validate_card`, which produces a fully-typed
/// `CardRecord`; nothing downstream re-checks optional fields.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawCard {
    #[serde(default)]
    pub front: Option<String>,
    #[serde(default)]
    pub back: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRecord {
    pub front: String,
    pub back: String,
    pub tags: Vec<String>,
}

/// One deck's cards, as loaded from a data source. A missing `cards` field
/// and an empty list are the same condition.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CardSet {
    #[serde(default)]
    pub cards: Vec<RawCard>,
}

/// One entry of the run configuration. All fields are optional in the file;
/// the builder reports which ones are missing.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSpec {
    #[serde(default)]
    pub data_json: Option<String>,
    #[serde(default)]
    pub deck_name: Option<String>,
    #[serde(default)]
    pub batch_size: Option<u32>,
}

impl DeckSpec {
    pub fn new(data_json: impl Into<String>, deck_name: impl Into<String>) -> Self {
        Self {
            data_json: Some(data_json.into()),
            deck_name: Some(deck_name.into()),
            batch_size: None,
        }
    }

    /// Configured batch size, falling back to the default when absent or
    /// zero.
    pub fn effective_batch_size(&self) -> NonZeroUsize {
        self.batch_size
            .and_then(|n| NonZeroUsize::new(n as usize))
            .unwrap_or(DEFAULT_BATCH_SIZE)
    }
}
