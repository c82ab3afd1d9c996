// Ports define what the streams core needs from storage, without implementing it.
//
// Adapters in `adapters::outbound` implement `StreamStore`: one backed by a JSON
// file on disk, one in memory for handler tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::streams::core::stream::{NewStream, Stream, StreamPatch, StreamQuery, StreamRef};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not find stream")]
    NotFound,

    #[error("Cannot update ID of a stream.")]
    ImmutableField,

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed storage file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

pub type StreamPredicate<'a> = &'a (dyn Fn(&Stream) -> bool + Send + Sync);

#[async_trait]
pub trait StreamStore: Send + Sync {
    /// Assigns a fresh id, appends the record and returns it.
    async fn create(&self, stream: NewStream) -> Result<Stream, StoreError>;

    async fn push(&self, stream: NewStream) -> Result<(), StoreError>;

    /// Appends every record in a single rewrite.
    async fn push_multiple(&self, streams: Vec<NewStream>) -> Result<(), StoreError>;

    /// Merges `update` into every record matching `query` and returns how many matched.
    ///
    /// Fails with [`StoreError::ImmutableField`] before touching storage when
    /// `update` carries an id.
    async fn patch(&self, query: StreamQuery, update: StreamPatch) -> Result<usize, StoreError>;

    async fn find(&self, id: &str) -> Result<Option<Stream>, StoreError>;

    async fn find_by(&self, predicate: StreamPredicate<'_>) -> Result<Option<Stream>, StoreError>;

    /// Removes the referenced record, failing with [`StoreError::NotFound`] if it is absent.
    async fn delete(&self, target: StreamRef<'_>) -> Result<(), StoreError>;

    async fn array(&self) -> Result<Vec<Stream>, StoreError>;

    async fn object(&self) -> Result<BTreeMap<String, Stream>, StoreError> {
        Ok(self
            .array()
            .await?
            .into_iter()
            .map(|stream| (stream.id.clone(), stream))
            .collect())
    }

    /// The records serialized exactly as they are persisted.
    async fn json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(&self.array().await?)?)
    }
}
