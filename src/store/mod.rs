// src/store/mod.rs
//! Local persistence for keys and envelopes
//!
//! Keys and ciphertext live in separate directories so that losing one
//! does not expose the other.

pub mod blob_store;
pub mod json_index;
pub mod key_store;

pub use blob_store::{BlobStore, FileMetadata, UploadReceipt};
pub use json_index::JsonIndex;
pub use key_store::{KeyRecord, KeyStore};

use crate::error::{CoreError, Result};

/// File IDs become file names; reject anything that could escape the store directory
pub fn validate_file_id(file_id: &str) -> Result<()> {
    let bad = file_id.is_empty()
        || file_id == "."
        || file_id == ".."
        || file_id.contains(['/', '\\', '\0']);
    if bad {
        return Err(CoreError::InvalidFileId(file_id.to_owned()));
    }
    Ok(())
}
