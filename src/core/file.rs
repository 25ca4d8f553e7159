// src/core/file.rs
//! File-level encryption/decryption operations
//!
//! Thin I/O shims over the engine: the whole file is read into memory, so
//! file size is bounded by available RAM.

use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::aliases::PlainText;
use crate::core::crypto::CryptoEngine;
use crate::core::envelope::{Envelope, FileDecryption};
use crate::core::key::FileKey;
use crate::core::util::write_atomic;
use crate::error::Result;

impl CryptoEngine {
    /// Encrypt a file on disk, recording its name and size in the envelope
    pub fn encrypt_file<P: AsRef<Path>>(&self, input_path: P, key: &FileKey) -> Result<Envelope> {
        let input_path = input_path.as_ref();
        let plaintext: PlainText = Zeroizing::new(std::fs::read(input_path)?);
        debug!(path = %input_path.display(), len = plaintext.len(), "read plaintext file");

        let filename = input_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let envelope = self.encrypt(&plaintext, key)?;
        Ok(envelope.with_source(filename, plaintext.len() as u64))
    }

    /// Decrypt an envelope and write the plaintext to `output_path`.
    ///
    /// The file is written even when the integrity check fails.
    pub fn decrypt_file<P: AsRef<Path>>(
        &self,
        envelope: &Envelope,
        key: &FileKey,
        output_path: P,
    ) -> Result<FileDecryption> {
        let decrypted = self.decrypt(envelope, key)?;
        let integrity_verified = decrypted.integrity_verified;
        let plaintext: PlainText = Zeroizing::new(decrypted.plaintext);

        write_atomic(output_path.as_ref(), &plaintext)?;
        debug!(path = %output_path.as_ref().display(), len = plaintext.len(), "wrote plaintext file");

        Ok(FileDecryption {
            bytes_written: plaintext.len() as u64,
            integrity_verified,
        })
    }
}
