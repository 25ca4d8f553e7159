// src/vault.rs
//! High-level workflow: encrypt-and-store, retrieve-and-decrypt, list, remove
//!
//! Coordinates the engine with the key store and the blob store. Every file
//! gets a fresh UUID and a fresh key.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::core::crypto::CryptoEngine;
use crate::core::envelope::FileDecryption;
use crate::error::Result;
use crate::store::{BlobStore, FileMetadata, KeyStore, UploadReceipt};

#[derive(Debug, Clone)]
pub struct Vault {
    engine: CryptoEngine,
    keys: KeyStore,
    blobs: BlobStore,
}

impl Vault {
    pub fn new(engine: CryptoEngine, keys: KeyStore, blobs: BlobStore) -> Self {
        Self { engine, keys, blobs }
    }

    /// Open both stores at the configured paths
    pub fn open(config: &Config) -> Result<Self> {
        let engine = CryptoEngine::new(config.key_size()?);
        let keys = KeyStore::open(&config.paths.key_dir)?;
        let blobs = BlobStore::open(&config.paths.storage_dir)?;
        info!(cipher = %engine.key_size(), "vault opened");
        Ok(Self::new(engine, keys, blobs))
    }

    pub fn engine(&self) -> &CryptoEngine {
        &self.engine
    }

    pub fn key_store(&self) -> &KeyStore {
        &self.keys
    }

    pub fn blob_store(&self) -> &BlobStore {
        &self.blobs
    }

    /// Encrypt `plaintext_path` under a new key and store key and envelope apart
    pub fn add_file<P: AsRef<Path>>(&self, plaintext_path: P) -> Result<UploadReceipt> {
        let file_id = Uuid::new_v4().to_string();
        info!(path = %plaintext_path.as_ref().display(), %file_id, "adding file");

        let key = self.engine.generate_key()?;
        let envelope = self.engine.encrypt_file(plaintext_path, &key)?;
        self.keys.save_key(&file_id, &key)?;

        match self.blobs.upload(&file_id, &envelope) {
            Ok(receipt) => Ok(receipt),
            Err(err) => {
                // The key would be unreachable without a listed envelope
                if let Err(cleanup) = self.keys.delete_key(&file_id) {
                    warn!(%file_id, error = %cleanup, "could not remove key after failed upload");
                }
                Err(err)
            }
        }
    }

    /// Fetch, decrypt and write a stored file.
    ///
    /// A failed integrity check is logged and reported in the result; the
    /// output file is still written.
    pub fn retrieve_file<P: AsRef<Path>>(&self, file_id: &str, output_path: P) -> Result<FileDecryption> {
        let key = self.keys.load_key(file_id)?;
        let envelope = self.blobs.download(file_id)?;
        let outcome = self.engine.decrypt_file(&envelope, &key, output_path.as_ref())?;

        if outcome.integrity_verified {
            info!(file_id, bytes = outcome.bytes_written, "decrypted, integrity verified");
        } else {
            warn!(file_id, "decrypted but integrity check FAILED; file may be corrupted or tampered with");
        }
        Ok(outcome)
    }

    pub fn list_files(&self) -> Result<BTreeMap<String, FileMetadata>> {
        self.blobs.list()
    }

    /// Remove envelope, metadata and key; `false` if nothing was stored
    pub fn remove_file(&self, file_id: &str) -> Result<bool> {
        let removed_blob = self.blobs.delete(file_id)?;
        let removed_key = self.keys.delete_key(file_id)?;
        Ok(removed_blob || removed_key)
    }
}
