pub mod errand;
pub mod offer;
pub mod professional;

use crate::error::CoreError;

/// Reject a required text field that is empty or whitespace-only.
pub(crate) fn require(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::MissingField(field.to_string()));
    }
    Ok(())
}
