use async_trait::async_trait;
use deckpacker_core::{PackageSink, PersistError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::task;

/// Writes package payloads into an output directory, tempfile-then-persist so
/// a failed write never leaves a truncated package behind.
pub struct DirectorySink {
    out_dir: PathBuf,
}

impl DirectorySink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }
}

#[async_trait]
impl PackageSink for DirectorySink {
    async fn persist(&self, file_name: &str, payload: &[u8]) -> Result<(), PersistError> {
        let dir = self.out_dir.clone();
        let path = self.out_dir.join(file_name);
        let bytes = payload.to_vec();
        let written = task::spawn_blocking(move || write_package(&dir, &path, &bytes)).await;
        match written {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(PersistError {
                file_name: file_name.to_string(),
                message: e.to_string(),
            }),
            Err(_) => Err(PersistError {
                file_name: file_name.to_string(),
                message: "write task failed".to_string(),
            }),
        }
    }
}

fn write_package(dir: &Path, path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(payload)?;
    tmp.flush()?;
    tmp.persist(path)?;
    Ok(())
}
