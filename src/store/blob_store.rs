// src/store/blob_store.rs
//! Local "cloud" directory: one JSON `<file_id>.enc` envelope per file
//! plus a `metadata.json` listing

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::consts::{ENVELOPE_EXTENSION, METADATA_FILE};
use crate::core::envelope::Envelope;
use crate::core::util::write_atomic;
use crate::enums::StorageType;
use crate::error::{CoreError, Result};
use crate::store::json_index::JsonIndex;
use crate::store::validate_file_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub original_filename: String,
    pub encrypted_filename: String,
    pub upload_timestamp: DateTime<Utc>,
    pub original_size: u64,
    pub original_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadReceipt {
    pub file_id: String,
    pub location: PathBuf,
    pub storage_type: StorageType,
    pub original_hash: String,
    pub original_size: u64,
}

#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
    metadata: JsonIndex<FileMetadata>,
}

impl BlobStore {
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        let metadata = JsonIndex::open(root.join(METADATA_FILE))?;
        info!(path = %root.display(), "blob store ready");
        Ok(Self { root, metadata })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn envelope_file_name(file_id: &str) -> String {
        format!("{file_id}.{ENVELOPE_EXTENSION}")
    }

    fn envelope_path(&self, file_id: &str) -> PathBuf {
        self.root.join(Self::envelope_file_name(file_id))
    }

    /// Store an envelope produced by `encrypt_file` and index its metadata
    pub fn upload(&self, file_id: &str, envelope: &Envelope) -> Result<UploadReceipt> {
        validate_file_id(file_id)?;
        let original_filename = envelope
            .original_filename()
            .ok_or(CoreError::MissingMetadata("original_filename"))?;
        let original_size = envelope
            .original_size()
            .ok_or(CoreError::MissingMetadata("original_size"))?;

        let location = self.envelope_path(file_id);
        write_atomic(&location, envelope.to_json_pretty()?.as_bytes())?;

        let record = FileMetadata {
            original_filename: original_filename.to_owned(),
            encrypted_filename: Self::envelope_file_name(file_id),
            upload_timestamp: Utc::now(),
            original_size,
            original_hash: envelope.original_hash().to_owned(),
        };
        if let Err(err) = self.metadata.insert(file_id, record) {
            if let Err(cleanup) = std::fs::remove_file(&location) {
                warn!(file_id, error = %cleanup, "could not remove unindexed envelope");
            }
            return Err(err);
        }
        info!(file_id, location = %location.display(), "envelope stored");

        Ok(UploadReceipt {
            file_id: file_id.to_owned(),
            location,
            storage_type: StorageType::Local,
            original_hash: envelope.original_hash().to_owned(),
            original_size,
        })
    }

    pub fn download(&self, file_id: &str) -> Result<Envelope> {
        validate_file_id(file_id)?;
        match std::fs::read_to_string(self.envelope_path(file_id)) {
            Ok(json) => Envelope::from_json(&json),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(CoreError::EnvelopeNotFound(file_id.to_owned()))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn contains(&self, file_id: &str) -> bool {
        validate_file_id(file_id).is_ok() && self.envelope_path(file_id).is_file()
    }

    /// Returns `false` if neither the envelope nor its metadata existed
    pub fn delete(&self, file_id: &str) -> Result<bool> {
        validate_file_id(file_id)?;
        let removed_file = match std::fs::remove_file(self.envelope_path(file_id)) {
            Ok(()) => true,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => false,
            Err(err) => return Err(err.into()),
        };
        let removed_record = self.metadata.remove(file_id)?.is_some();
        if removed_file || removed_record {
            info!(file_id, "envelope deleted");
        }
        Ok(removed_file || removed_record)
    }

    pub fn list(&self) -> Result<BTreeMap<String, FileMetadata>> {
        self.metadata.load()
    }
}
