use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::objects;

/// Load a JSON value stored under `key`.
pub async fn load_state<T: DeserializeOwned>(root: &Path, key: &str) -> Result<T, StorageError> {
    let body = objects::get_object(root, key).await?;
    let value: T = serde_json::from_slice(&body)?;
    Ok(value)
}

/// Save a JSON value under `key`, replacing whatever was there.
pub async fn save_state<T: Serialize>(root: &Path, key: &str, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(root, key, body).await
}
