use std::io::ErrorKind;
use std::path::Path;

use connect_core::storage_keys;
use tokio::fs;

use crate::error::StorageError;

/// Read the raw bytes stored under `key` in the data directory.
pub async fn get_object(root: &Path, key: &str) -> Result<Vec<u8>, StorageError> {
    let path = root.join(storage_keys::collection_file(key));
    fs::read(&path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                key: key.to_string(),
            }
        } else {
            StorageError::Read {
                key: key.to_string(),
                source: e,
            }
        }
    })
}

/// Replace the object stored under `key`.
///
/// The body is written to a scratch file and renamed over the target, so a
/// concurrent reader sees either the old contents or the new ones.
pub async fn put_object(root: &Path, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
    let write_err = |source| StorageError::Write {
        key: key.to_string(),
        source,
    };

    fs::create_dir_all(root).await.map_err(write_err)?;

    let tmp_path = root.join(storage_keys::collection_tmp_file(key));
    let path = root.join(storage_keys::collection_file(key));
    fs::write(&tmp_path, body).await.map_err(write_err)?;
    fs::rename(&tmp_path, &path).await.map_err(write_err)?;

    Ok(())
}

