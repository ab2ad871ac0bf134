use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid help type: {0}")]
    InvalidHelpType(String),

    #[error("invalid contact method: {0}")]
    InvalidContactMethod(String),

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("invalid budget: {0}")]
    InvalidBudget(String),
}
