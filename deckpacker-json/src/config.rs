use deckpacker_core::DeckSpec;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Top-level run configuration, `{ "decks": [...] }`. A missing `decks`
/// field parses as an empty run; the processor reports that case.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub decks: Vec<DeckSpec>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{path}' is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_run_config(path: impl AsRef<Path>) -> Result<RunConfig, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
