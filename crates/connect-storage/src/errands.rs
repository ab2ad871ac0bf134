use std::path::PathBuf;

use uuid::Uuid;

use connect_core::models::errand::{Errand, NewErrand};
use connect_core::storage_keys;

use crate::collection::JsonCollection;
use crate::error::StorageError;

/// Posted errands, oldest first.
pub struct ErrandStore {
    collection: JsonCollection<Errand>,
}

impl ErrandStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(data_dir, storage_keys::ERRANDS),
        }
    }

    pub async fn post(&self, new: NewErrand) -> Result<Errand, StorageError> {
        let errand = new.into_errand();
        self.collection.append(errand.clone()).await?;
        Ok(errand)
    }

    pub async fn list(&self) -> Result<Vec<Errand>, StorageError> {
        self.collection.load().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Errand, StorageError> {
        self.collection
            .load()
            .await?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| StorageError::NotFound {
                key: format!("{}/{id}", storage_keys::ERRANDS),
            })
    }
}
