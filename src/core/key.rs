// src/core/key.rs
//! Per-file key material and its text representations
//!
//! A `FileKey` is handed to the engine for one encrypt or decrypt call and
//! is owned by the caller (usually the key store) the rest of the time.

use std::fmt;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::enums::KeySize;
use crate::error::{CoreError, Result};

/// Raw symmetric key bytes, zeroized on drop, redacted in `Debug`
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct FileKey(Vec<u8>);

impl FileKey {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn expose_secret(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> usize {
        self.0.len() * 8
    }

    /// Fails with `InvalidKeyLength` unless the key matches `size`
    pub fn check_size(&self, size: KeySize) -> Result<()> {
        if self.len() == size.bytes() {
            Ok(())
        } else {
            Err(CoreError::InvalidKeyLength {
                expected: size.bytes(),
                actual: self.len(),
            })
        }
    }

    /// Standard base64, the at-rest form used by the key store
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    pub fn from_base64(encoded: &str) -> Result<Self> {
        Ok(Self(STANDARD.decode(encoded.trim())?))
    }
}

impl fmt::Debug for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileKey([REDACTED; {} bytes])", self.0.len())
    }
}

/// Multiple string representations of a key for display
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn key_representations(key: &FileKey) -> KeyRepr {
    KeyRepr {
        hex: hex::encode(key.expose_secret()),
        base64: STANDARD.encode(key.expose_secret()),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(key.expose_secret()),
    }
}
