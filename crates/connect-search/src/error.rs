use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    InvalidCoordinate(#[from] connect_core::error::CoreError),
}
