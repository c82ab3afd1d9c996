// In memory implementation of the StreamStore port.
//
// Purpose
// - Support handler tests and local development without touching the disk.
// - `toggle_offline` makes every call fail, to exercise error paths.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::streams::core::id::generate_id;
use crate::modules::streams::core::ports::{StoreError, StreamPredicate, StreamStore};
use crate::modules::streams::core::stream::{NewStream, Stream, StreamPatch, StreamQuery, StreamRef};

#[derive(Default)]
pub struct InMemoryStreamStore {
    streams: RwLock<Vec<Stream>>,
    is_offline: bool,
}

impl InMemoryStreamStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_streams(streams: Vec<Stream>) -> Self {
        Self {
            streams: RwLock::new(streams),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Stream store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl StreamStore for InMemoryStreamStore {
    async fn create(&self, stream: NewStream) -> Result<Stream, StoreError> {
        self.ensure_online()?;
        let created = stream.into_stream(generate_id());
        self.streams.write().await.push(created.clone());
        Ok(created)
    }

    async fn push(&self, stream: NewStream) -> Result<(), StoreError> {
        self.create(stream).await.map(|_| ())
    }

    async fn push_multiple(&self, streams: Vec<NewStream>) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.streams
            .write()
            .await
            .extend(streams.into_iter().map(|s| s.into_stream(generate_id())));
        Ok(())
    }

    async fn patch(&self, query: StreamQuery, update: StreamPatch) -> Result<usize, StoreError> {
        update.validate()?;
        self.ensure_online()?;
        let mut guard = self.streams.write().await;
        let mut matched = 0;
        for stream in guard.iter_mut().filter(|s| query.matches(s)) {
            update.apply_to(stream);
            matched += 1;
        }
        Ok(matched)
    }

    async fn find(&self, id: &str) -> Result<Option<Stream>, StoreError> {
        self.ensure_online()?;
        Ok(self.streams.read().await.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by(&self, predicate: StreamPredicate<'_>) -> Result<Option<Stream>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .streams
            .read()
            .await
            .iter()
            .find(|&s| predicate(s))
            .cloned())
    }

    async fn delete(&self, target: StreamRef<'_>) -> Result<(), StoreError> {
        self.ensure_online()?;
        let id = target.id();
        let mut guard = self.streams.write().await;
        if !guard.iter().any(|s| s.id == id) {
            return Err(StoreError::NotFound);
        }
        guard.retain(|s| s.id != id);
        Ok(())
    }

    async fn array(&self) -> Result<Vec<Stream>, StoreError> {
        self.ensure_online()?;
        Ok(self.streams.read().await.clone())
    }
}
