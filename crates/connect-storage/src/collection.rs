use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;
use tracing::info;

use crate::error::StorageError;
use crate::state;

/// An ordered, append-only list of records persisted as one JSON array.
///
/// Appends are read-modify-write and are serialized through an async mutex.
/// A missing file reads as an empty collection.
pub struct JsonCollection<T> {
    root: PathBuf,
    key: String,
    write_lock: Mutex<()>,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    pub fn new(root: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            key: key.into(),
            write_lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the whole collection in insertion order.
    pub async fn load(&self) -> Result<Vec<T>, StorageError> {
        match state::load_state::<Vec<T>>(&self.root, &self.key).await {
            Ok(records) => Ok(records),
            Err(StorageError::NotFound { .. }) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// Append one record. Returns the new length of the collection.
    pub async fn append(&self, record: T) -> Result<usize, StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        records.push(record);
        state::save_state(&self.root, &self.key, &records).await?;

        info!(key = %self.key, len = records.len(), "record appended");
        Ok(records.len())
    }

    /// Build a record from the current contents and append it, atomically with
    /// respect to other writers on this collection. Returns the appended record.
    pub async fn append_with<F>(&self, build: F) -> Result<T, StorageError>
    where
        F: FnOnce(&[T]) -> T,
        T: Clone,
    {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        let record = build(&records);
        records.push(record.clone());
        state::save_state(&self.root, &self.key, &records).await?;

        info!(key = %self.key, len = records.len(), "record appended");
        Ok(record)
    }
}
