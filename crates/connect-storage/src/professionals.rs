use std::path::PathBuf;

use connect_core::models::professional::{NewProfessional, Professional};
use connect_core::storage_keys;

use crate::collection::JsonCollection;
use crate::error::StorageError;

/// Professionals who have registered as available.
pub struct ProfessionalRegistry {
    collection: JsonCollection<Professional>,
}

impl ProfessionalRegistry {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(data_dir, storage_keys::PROFESSIONALS),
        }
    }

    /// Register a professional. Ids start at 1 and increase by one per
    /// registration.
    pub async fn register(&self, new: NewProfessional) -> Result<Professional, StorageError> {
        self.collection
            .append_with(|existing| {
                let next_id = existing.iter().map(|p| p.id).max().unwrap_or(0) + 1;
                new.with_id(next_id)
            })
            .await
    }

    pub async fn list(&self) -> Result<Vec<Professional>, StorageError> {
        self.collection.load().await
    }
}
