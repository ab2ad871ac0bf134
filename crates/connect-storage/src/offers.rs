//! The help offer store.
//!
//! Offers are only ever appended and read back wholesale. Reads never fail:
//! a missing or unreadable collection is reported as "no offers".

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{error, warn};

use connect_core::models::offer::HelpOffer;
use connect_core::storage_keys;

use crate::collection::JsonCollection;
use crate::error::StorageError;

/// Repository of help offers.
#[async_trait]
pub trait OfferStore: Send + Sync {
    /// Append an offer to the end of the stored sequence.
    async fn try_submit(&self, offer: HelpOffer) -> Result<(), StorageError>;

    /// The stored sequence in submission order; empty if nothing is stored or
    /// the stored data cannot be read.
    async fn load_all(&self) -> Vec<HelpOffer>;

    /// Append an offer, logging rather than returning a persistence failure.
    async fn submit(&self, offer: HelpOffer) {
        if let Err(e) = self.try_submit(offer).await {
            error!(error = %e, "failed to persist help offer");
        }
    }
}

/// Offers persisted as a JSON array in the data directory.
pub struct JsonOfferStore {
    collection: JsonCollection<HelpOffer>,
}

impl JsonOfferStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(data_dir, storage_keys::HELP_OFFERS),
        }
    }
}

#[async_trait]
impl OfferStore for JsonOfferStore {
    async fn try_submit(&self, offer: HelpOffer) -> Result<(), StorageError> {
        self.collection.append(offer).await?;
        Ok(())
    }

    async fn load_all(&self) -> Vec<HelpOffer> {
        match self.collection.load().await {
            Ok(offers) => offers,
            Err(e) => {
                warn!(key = %self.collection.key(), error = %e, "error loading help offers");
                Vec::new()
            }
        }
    }
}

/// Offers held in process memory only.
#[derive(Default)]
pub struct MemoryOfferStore {
    offers: Mutex<Vec<HelpOffer>>,
}

impl MemoryOfferStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OfferStore for MemoryOfferStore {
    async fn try_submit(&self, offer: HelpOffer) -> Result<(), StorageError> {
        self.offers.lock().await.push(offer);
        Ok(())
    }

    async fn load_all(&self) -> Vec<HelpOffer> {
        self.offers.lock().await.clone()
    }
}
