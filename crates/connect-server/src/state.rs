use std::path::PathBuf;
use std::sync::Arc;

use connect_storage::errands::ErrandStore;
use connect_storage::offers::{JsonOfferStore, OfferStore};
use connect_storage::professionals::ProfessionalRegistry;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub offers: Arc<dyn OfferStore>,
    pub professionals: Arc<ProfessionalRegistry>,
    pub errands: Arc<ErrandStore>,
}

impl AppState {
    /// All collections backed by JSON files under `data_dir`.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self::with_offer_store(Arc::new(JsonOfferStore::new(&data_dir)), data_dir)
    }

    /// Use the given offer store; the other collections live under `data_dir`.
    pub fn with_offer_store(offers: Arc<dyn OfferStore>, data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            offers,
            professionals: Arc::new(ProfessionalRegistry::new(&data_dir)),
            errands: Arc::new(ErrandStore::new(data_dir)),
        }
    }
}
