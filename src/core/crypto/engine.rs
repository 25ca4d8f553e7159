// src/core/crypto/engine.rs
//! The encrypt/decrypt pipeline and its integrity contract

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::aliases::Iv;
use crate::consts::IV_LEN;
use crate::core::envelope::{Decrypted, Envelope};
use crate::core::key::FileKey;
use crate::core::util::{digests_match, fill_random, sha256_hex};
use crate::enums::KeySize;
use crate::error::{CoreError, Result};

use super::cipher::{decrypt_padded, encrypt_padded};

/// Stateless AES-CBC engine; the key size is the only configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CryptoEngine {
    key_size: KeySize,
}

impl CryptoEngine {
    pub fn new(key_size: KeySize) -> Self {
        Self { key_size }
    }

    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Fresh random key of the configured size
    pub fn generate_key(&self) -> Result<FileKey> {
        let mut bytes = vec![0u8; self.key_size.bytes()];
        fill_random(&mut bytes)?;
        debug!(bits = self.key_size.bits(), "generated file key");
        Ok(FileKey::new(bytes))
    }

    /// Fresh random IV, independent of key and plaintext
    pub fn generate_iv() -> Result<Iv> {
        let mut iv = [0u8; IV_LEN];
        fill_random(&mut iv)?;
        Ok(iv)
    }

    /// Hex SHA-256 digest
    #[inline]
    pub fn hash(data: &[u8]) -> String {
        sha256_hex(data)
    }

    /// Encrypt under a freshly generated IV
    pub fn encrypt(&self, plaintext: &[u8], key: &FileKey) -> Result<Envelope> {
        key.check_size(self.key_size)?;
        let iv = Self::generate_iv()?;
        self.encrypt_with_iv(plaintext, key, &iv)
    }

    /// Encrypt under a caller-chosen IV.
    ///
    /// Meant for known-answer vectors. An IV must never be used twice with
    /// the same key; `encrypt` guarantees that, this method does not.
    #[doc(hidden)]
    pub fn encrypt_with_iv(&self, plaintext: &[u8], key: &FileKey, iv: &Iv) -> Result<Envelope> {
        key.check_size(self.key_size)?;
        debug!(len = plaintext.len(), "encrypting");

        let original_hash = Self::hash(plaintext);
        let ciphertext = encrypt_padded(self.key_size, key.expose_secret(), iv, plaintext)?;
        debug!(padded_len = ciphertext.len(), "encryption done");

        Ok(Envelope::new(
            STANDARD.encode(&ciphertext),
            STANDARD.encode(iv),
            original_hash,
            self.key_size.bits(),
        ))
    }

    /// Decrypt and check the recovered plaintext against the stored hash.
    ///
    /// Structural failures (bad encoding, bad padding) are errors. A hash
    /// mismatch is reported through `Decrypted::integrity_verified` only.
    pub fn decrypt(&self, envelope: &Envelope, key: &FileKey) -> Result<Decrypted> {
        key.check_size(self.key_size)?;

        let ciphertext = STANDARD.decode(envelope.ciphertext())?;
        let iv_bytes = STANDARD.decode(envelope.iv())?;
        let iv: Iv = iv_bytes
            .as_slice()
            .try_into()
            .map_err(|_| CoreError::InvalidIvLength(iv_bytes.len()))?;

        let plaintext = decrypt_padded(self.key_size, key.expose_secret(), &iv, &ciphertext)?;
        let integrity_verified = digests_match(&Self::hash(&plaintext), envelope.original_hash());
        debug!(len = plaintext.len(), integrity_verified, "decryption done");

        Ok(Decrypted {
            plaintext,
            integrity_verified,
        })
    }

    /// UTF-8 convenience over `encrypt`
    pub fn encrypt_str(&self, text: &str, key: &FileKey) -> Result<Envelope> {
        self.encrypt(text.as_bytes(), key)
    }

    /// UTF-8 convenience over `decrypt`; returns the text and the integrity verdict
    pub fn decrypt_str(&self, envelope: &Envelope, key: &FileKey) -> Result<(String, bool)> {
        let (plaintext, verified) = self.decrypt(envelope, key)?.into_parts();
        Ok((String::from_utf8(plaintext)?, verified))
    }
}
