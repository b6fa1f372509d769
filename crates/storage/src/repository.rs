use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use earcheck_core::model::{AGE_GROUP_KEY, AgeGroup, Stage};

/// Errors surfaced by session storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

/// The injected storage capability for the screening session.
///
/// Deliberately shaped like a browser `localStorage`: flat string keys and
/// values, no expiry, no durability guarantee. Everything the flow persists
/// (`sound1Score`..`sound3Score`, `ageGroup`) goes through this seam so the
/// services can be tested against an in-memory backend.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch a value, or None when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write or overwrite a value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove one key. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Drop every key. Equivalent to starting a fresh session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory key-value backend. The only backend the app ships: results are
/// scoped to one process lifetime by design.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        guard.clear();
        Ok(())
    }
}

/// Typed facade over the raw key-value store.
///
/// Encodes the flow's fixed key set and tolerant read rules: a missing or
/// unparseable stored value reads back as None, never as an error.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    #[must_use]
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }

    /// Persist a stage score under its `sound{n}Score` key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend write fails.
    pub async fn set_stage_score(&self, stage: Stage, score: u8) -> Result<(), StorageError> {
        self.inner
            .set(stage.score_key(), &score.min(100).to_string())
            .await
    }

    /// Read a stage score back. Absent or corrupt entries yield None.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend read fails.
    pub async fn stage_score(&self, stage: Stage) -> Result<Option<u8>, StorageError> {
        let raw = self.inner.get(stage.score_key()).await?;
        Ok(raw
            .and_then(|value| value.parse::<u8>().ok())
            .filter(|score| *score <= 100))
    }

    /// Persist the selected age group.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend write fails.
    pub async fn set_age_group(&self, group: AgeGroup) -> Result<(), StorageError> {
        self.inner.set(AGE_GROUP_KEY, group.as_str()).await
    }

    /// Read the selected age group, if one was stored and is recognizable.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend read fails.
    pub async fn age_group(&self) -> Result<Option<AgeGroup>, StorageError> {
        let raw = self.inner.get(AGE_GROUP_KEY).await?;
        Ok(raw.and_then(|value| value.parse::<AgeGroup>().ok()))
    }

    /// Wipe the whole session (scores and age group).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend is unavailable.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.inner.clear().await
    }
}
