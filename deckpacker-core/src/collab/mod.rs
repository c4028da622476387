use crate::errors::{EncodeError, PersistError, SourceError};
use crate::models::{CardRecord, CardSet};
use async_trait::async_trait;

pub mod memory;

/// Resolves a source identifier to a card set.
#[async_trait]
pub trait CardSource: Send + Sync {
    async fn load(&self, source: &str) -> Result<CardSet, SourceError>;
}

/// Builds one output package. An encoder belongs to exactly one batch:
/// created by the factory at batch start, consumed by `finalize`.
#[async_trait]
pub trait BatchEncoder: Send {
    fn add_card(&mut self, card: &CardRecord) -> Result<(), EncodeError>;
    async fn finalize(self: Box<Self>) -> Result<Vec<u8>, EncodeError>;
}

pub trait EncoderFactory: Send + Sync {
    fn encoder_for(&self, deck_name: &str) -> Box<dyn BatchEncoder>;
}

/// Persists finalized package payloads under their computed file names.
#[async_trait]
pub trait PackageSink: Send + Sync {
    async fn persist(&self, file_name: &str, payload: &[u8]) -> Result<(), PersistError>;
}
