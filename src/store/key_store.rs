// src/store/key_store.rs
//! Key directory: one base64 `<file_id>.key` per file plus a JSON index

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::consts::{KEY_EXTENSION, KEY_INDEX_FILE};
use crate::core::key::FileKey;
use crate::core::util::write_atomic;
use crate::error::{CoreError, Result};
use crate::store::json_index::JsonIndex;
use crate::store::validate_file_id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRecord {
    pub key_file: String,
    pub created: DateTime<Utc>,
    /// Bits
    pub key_size: u32,
}

#[derive(Debug, Clone)]
pub struct KeyStore {
    root: PathBuf,
    index: JsonIndex<KeyRecord>,
}

impl KeyStore {
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        let index = JsonIndex::open(root.join(KEY_INDEX_FILE))?;
        info!(path = %root.display(), "key store ready");
        Ok(Self { root, index })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_file_name(file_id: &str) -> String {
        format!("{file_id}.{KEY_EXTENSION}")
    }

    fn key_path(&self, file_id: &str) -> PathBuf {
        self.root.join(Self::key_file_name(file_id))
    }

    /// Persist `key` and record it in the index (replacing any previous key)
    pub fn save_key(&self, file_id: &str, key: &FileKey) -> Result<()> {
        validate_file_id(file_id)?;
        write_atomic(self.key_path(file_id), key.to_base64().as_bytes())?;
        self.index.insert(
            file_id,
            KeyRecord {
                key_file: Self::key_file_name(file_id),
                created: Utc::now(),
                key_size: key.bits() as u32,
            },
        )?;
        info!(file_id, "key saved");
        Ok(())
    }

    pub fn load_key(&self, file_id: &str) -> Result<FileKey> {
        validate_file_id(file_id)?;
        let encoded = match std::fs::read_to_string(self.key_path(file_id)) {
            Ok(encoded) => encoded,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(CoreError::KeyNotFound(file_id.to_owned()))
            }
            Err(err) => return Err(err.into()),
        };
        FileKey::from_base64(&encoded)
    }

    pub fn contains(&self, file_id: &str) -> bool {
        validate_file_id(file_id).is_ok() && self.key_path(file_id).is_file()
    }

    /// Destroy a key; returns `false` if there was nothing to remove
    pub fn delete_key(&self, file_id: &str) -> Result<bool> {
        validate_file_id(file_id)?;
        let removed_file = match std::fs::remove_file(self.key_path(file_id)) {
            Ok(()) => true,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => false,
            Err(err) => return Err(err.into()),
        };
        let removed_record = self.index.remove(file_id)?.is_some();
        if removed_file || removed_record {
            info!(file_id, "key deleted");
        }
        Ok(removed_file || removed_record)
    }

    pub fn record(&self, file_id: &str) -> Result<Option<KeyRecord>> {
        self.index.get(file_id)
    }

    pub fn records(&self) -> Result<std::collections::BTreeMap<String, KeyRecord>> {
        self.index.load()
    }
}
