// File backed implementation of the StreamStore port.
//
// Responsibilities
// - Persist every stream as one compact JSON array in a single file.
// - Re-read the whole file on every call and rewrite it on every mutation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::modules::streams::core::id::generate_id;
use crate::modules::streams::core::ports::{StoreError, StreamPredicate, StreamStore};
use crate::modules::streams::core::stream::{NewStream, Stream, StreamPatch, StreamQuery, StreamRef};
use crate::shared::infrastructure::json_array_file::{JsonArrayFile, JsonArrayFileError};

impl From<JsonArrayFileError> for StoreError {
    fn from(error: JsonArrayFileError) -> Self {
        match error {
            JsonArrayFileError::Io(e) => StoreError::Io(e),
            JsonArrayFileError::Json(e) => StoreError::Malformed(e),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsonFileStreamStore {
    file: JsonArrayFile<Stream>,
}

impl JsonFileStreamStore {
    /// Opens the store at `path`, creating an empty array file if none exists.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let file = JsonArrayFile::new(path);
        if file.ensure_exists().await? {
            tracing::info!(path = %file.path().display(), "created empty stream store");
        }
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    async fn read(&self) -> Result<Vec<Stream>, StoreError> {
        Ok(self.file.read().await?)
    }

    async fn write(&self, streams: &[Stream]) -> Result<(), StoreError> {
        self.file.write(streams).await?;
        tracing::debug!(count = streams.len(), "wrote stream store");
        Ok(())
    }
}

#[async_trait]
impl StreamStore for JsonFileStreamStore {
    async fn create(&self, stream: NewStream) -> Result<Stream, StoreError> {
        let created = stream.into_stream(generate_id());
        let mut streams = self.read().await?;
        streams.push(created.clone());
        self.write(&streams).await?;
        tracing::debug!(id = %created.id, "created stream");
        Ok(created)
    }

    async fn push(&self, stream: NewStream) -> Result<(), StoreError> {
        self.create(stream).await.map(|_| ())
    }

    async fn push_multiple(&self, streams: Vec<NewStream>) -> Result<(), StoreError> {
        let mut all = self.read().await?;
        all.extend(streams.into_iter().map(|s| s.into_stream(generate_id())));
        self.write(&all).await
    }

    async fn patch(&self, query: StreamQuery, update: StreamPatch) -> Result<usize, StoreError> {
        update.validate()?;
        let mut streams = self.read().await?;
        let mut matched = 0;
        for stream in streams.iter_mut().filter(|s| query.matches(s)) {
            update.apply_to(stream);
            matched += 1;
        }
        self.write(&streams).await?;
        tracing::debug!(matched, "patched streams");
        Ok(matched)
    }

    async fn find(&self, id: &str) -> Result<Option<Stream>, StoreError> {
        Ok(self.read().await?.into_iter().find(|s| s.id == id))
    }

    async fn find_by(&self, predicate: StreamPredicate<'_>) -> Result<Option<Stream>, StoreError> {
        Ok(self.read().await?.into_iter().find(|s| predicate(s)))
    }

    async fn delete(&self, target: StreamRef<'_>) -> Result<(), StoreError> {
        let id = target.id();
        let mut streams = self.read().await?;
        if !streams.iter().any(|s| s.id == id) {
            return Err(StoreError::NotFound);
        }
        streams.retain(|s| s.id != id);
        self.write(&streams).await?;
        tracing::debug!(id, "deleted stream");
        Ok(())
    }

    async fn array(&self) -> Result<Vec<Stream>, StoreError> {
        self.read().await
    }
}
