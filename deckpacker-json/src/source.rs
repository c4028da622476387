use async_trait::async_trait;
use deckpacker_core::{CardSet, CardSource, SourceError};
use std::path::{Path, PathBuf};
use tokio::task;

/// Loads card sets from JSON files under a data directory. The source
/// identifier is the file name, extension included.
pub struct JsonCardSource {
    data_dir: PathBuf,
}

impl JsonCardSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[async_trait]
impl CardSource for JsonCardSource {
    async fn load(&self, source: &str) -> Result<CardSet, SourceError> {
        let path = self.data_dir.join(source);
        let loaded = task::spawn_blocking(move || read_card_set(&path)).await;
        match loaded {
            Ok(Ok(set)) => Ok(set),
            Ok(Err(message)) => Err(SourceError {
                source: source.to_string(),
                message,
            }),
            Err(_) => Err(SourceError {
                source: source.to_string(),
                message: "load task failed".to_string(),
            }),
        }
    }
}

fn read_card_set(path: &Path) -> Result<CardSet, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}
