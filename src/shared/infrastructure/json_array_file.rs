// A single file holding a JSON array, read and rewritten whole.
//
// - Every read parses the full file; every write replaces it.
// - No caching and no locking: concurrent writers race, last write wins.

use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;

#[derive(Debug, thiserror::Error)]
pub enum JsonArrayFileError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct JsonArrayFile<T> {
    path: PathBuf,
    _items: PhantomData<fn() -> T>,
}

impl<T> JsonArrayFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _items: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes an empty array if the file does not exist yet. Returns whether it did.
    pub async fn ensure_exists(&self) -> Result<bool, JsonArrayFileError> {
        if fs::try_exists(&self.path).await? {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, b"[]").await?;
        Ok(true)
    }

    pub async fn read(&self) -> Result<Vec<T>, JsonArrayFileError> {
        let bytes = fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn write(&self, items: &[T]) -> Result<(), JsonArrayFileError> {
        let bytes = serde_json::to_vec(items)?;
        fs::write(&self.path, bytes).await?;
        Ok(())
    }
}
