use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::core::{AppConfig, StoreError};
use crate::holdings::types::Holding;

const CACHE_FILE_NAME: &str = "holdings_cache.json";

/// Single-slot persistence for the last known good holdings list.
#[async_trait]
pub trait HoldingStore: Send + Sync {
    /// Replace the stored list wholesale.
    async fn save(&self, holdings: &[Holding]) -> Result<(), StoreError>;

    /// Read the stored list. No prior save means an empty list, not an error.
    async fn load(&self) -> Result<Vec<Holding>, StoreError>;
}

/// File-backed store. One mutex covers save and load so a load never sees a
/// half-written file; writes land in a sibling temp file and are renamed into
/// place, which keeps the slot at its prior state if the write dies midway.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(CACHE_FILE_NAME),
            lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.cache_dir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HoldingStore for FileStore {
    async fn save(&self, holdings: &[Holding]) -> Result<(), StoreError> {
        let json = serde_json::to_vec(holdings)?;
        let tmp = self.path.with_extension("json.tmp");

        let _guard = self.lock.lock().await;
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn load(&self) -> Result<Vec<Holding>, StoreError> {
        let _guard = self.lock.lock().await;
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }
}
