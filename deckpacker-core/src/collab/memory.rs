use super::{BatchEncoder, CardSource, EncoderFactory, PackageSink};
use crate::errors::{EncodeError, PersistError, SourceError};
use crate::models::{CardRecord, CardSet};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

/// In-memory card source keyed by source identifier.
#[derive(Default)]
pub struct MemoryCardSource {
    sets: HashMap<String, CardSet>,
}

impl MemoryCardSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: impl Into<String>, set: CardSet) {
        self.sets.insert(source.into(), set);
    }
}

#[async_trait]
impl CardSource for MemoryCardSource {
    async fn load(&self, source: &str) -> Result<CardSet, SourceError> {
        self.sets.get(source).cloned().ok_or_else(|| SourceError {
            source: source.to_string(),
            message: "not found".to_string(),
        })
    }
}

/// Encoder double whose payload is the deck name followed by one line per
/// card front, so tests can assert on what each package contained.
#[derive(Default)]
pub struct MemoryEncoderFactory {
    /// Fronts the encoders refuse, for exercising per-card encode failures.
    pub reject_fronts: Vec<String>,
}

impl MemoryEncoderFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EncoderFactory for MemoryEncoderFactory {
    fn encoder_for(&self, deck_name: &str) -> Box<dyn BatchEncoder> {
        Box::new(MemoryEncoder {
            deck_name: deck_name.to_string(),
            reject_fronts: self.reject_fronts.clone(),
            cards: Vec::new(),
        })
    }
}

pub struct MemoryEncoder {
    deck_name: String,
    reject_fronts: Vec<String>,
    cards: Vec<CardRecord>,
}

#[async_trait]
impl BatchEncoder for MemoryEncoder {
    fn add_card(&mut self, card: &CardRecord) -> Result<(), EncodeError> {
        if self.reject_fronts.iter().any(|f| f == &card.front) {
            return Err(EncodeError {
                message: format!("card '{}' was refused", card.front),
            });
        }
        self.cards.push(card.clone());
        Ok(())
    }

    async fn finalize(self: Box<Self>) -> Result<Vec<u8>, EncodeError> {
        let MemoryEncoder {
            deck_name, cards, ..
        } = *self;
        let mut payload = deck_name.into_bytes();
        payload.push(b'\n');
        for card in &cards {
            payload.extend_from_slice(card.front.as_bytes());
            payload.push(b'\n');
        }
        Ok(payload)
    }
}

/// Sink that records every persisted payload.
#[derive(Default)]
pub struct MemorySink {
    /// When set, every persist call fails.
    pub fail_writes: bool,
    files: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn file_names(&self) -> Vec<String> {
        self.files.lock().iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn files(&self) -> Vec<(String, Vec<u8>)> {
        self.files.lock().clone()
    }
}

#[async_trait]
impl PackageSink for MemorySink {
    async fn persist(&self, file_name: &str, payload: &[u8]) -> Result<(), PersistError> {
        if self.fail_writes {
            return Err(PersistError {
                file_name: file_name.to_string(),
                message: "write refused".to_string(),
            });
        }
        self.files.lock().push((file_name.to_string(), payload.to_vec()));
        Ok(())
    }
}

/// Sink that drops every payload; backs dry runs.
#[derive(Default)]
pub struct NullSink;

#[async_trait]
impl PackageSink for NullSink {
    async fn persist(&self, _file_name: &str, _payload: &[u8]) -> Result<(), PersistError> {
        Ok(())
    }
}
