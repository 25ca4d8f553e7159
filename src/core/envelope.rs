// src/core/envelope.rs
//! The stored record produced by one encryption
//!
//! Field names match the JSON records already on disk; the camelCase
//! spellings are accepted when reading. A record carrying both spellings of
//! one field (`original_hash` and `originalHash`) is rejected as a duplicate
//! field.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    ciphertext: String,
    iv: String,
    #[serde(alias = "originalHash")]
    original_hash: String,
    #[serde(alias = "keySize")]
    key_size: u32,
    #[serde(
        default,
        alias = "originalFilename",
        skip_serializing_if = "Option::is_none"
    )]
    original_filename: Option<String>,
    #[serde(default, alias = "originalSize", skip_serializing_if = "Option::is_none")]
    original_size: Option<u64>,
}

impl Envelope {
    pub(crate) fn new(ciphertext: String, iv: String, original_hash: String, key_size: u32) -> Self {
        Self {
            ciphertext,
            iv,
            original_hash,
            key_size,
            original_filename: None,
            original_size: None,
        }
    }

    /// Attach the source file's name and size at creation time
    pub(crate) fn with_source(mut self, filename: String, size: u64) -> Self {
        self.original_filename = Some(filename);
        self.original_size = Some(size);
        self
    }

    /// Base64 ciphertext
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// Base64 IV
    pub fn iv(&self) -> &str {
        &self.iv
    }

    /// Hex SHA-256 of the unpadded plaintext
    pub fn original_hash(&self) -> &str {
        &self.original_hash
    }

    /// Key size in bits (informational)
    pub fn key_size(&self) -> u32 {
        self.key_size
    }

    pub fn original_filename(&self) -> Option<&str> {
        self.original_filename.as_deref()
    }

    pub fn original_size(&self) -> Option<u64> {
        self.original_size
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(CoreError::from)
    }
}

/// Output of `decrypt`: the recovered bytes plus the integrity verdict
///
/// A `false` verdict is not an error; the caller decides what to do with
/// the plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decrypted {
    pub plaintext: Vec<u8>,
    pub integrity_verified: bool,
}

impl Decrypted {
    pub fn into_parts(self) -> (Vec<u8>, bool) {
        (self.plaintext, self.integrity_verified)
    }
}

/// Output of `decrypt_file`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileDecryption {
    pub bytes_written: u64,
    pub integrity_verified: bool,
}
