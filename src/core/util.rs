//! Small utility functions used across the core module
//!
//! Hashing, randomness, digest comparison and atomic writes.
//! Keep this light; split further if it grows.

use std::io::Write;
use std::path::Path;

use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tempfile::NamedTempFile;

use crate::error::{CoreError, Result};

/// Compute SHA-256 and return it as a lowercase hex string
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Fill `buf` from the operating system CSPRNG
pub fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|err| CoreError::EntropySource(err.to_string()))
}

/// Compare two hex digests without short-circuiting on the first difference
pub fn digests_match(computed: &str, stored: &str) -> bool {
    computed.as_bytes().ct_eq(stored.as_bytes()).into()
}

/// Write `data` to a temp file beside `path`, then rename it into place
pub fn write_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| CoreError::Io(err.error))?;
    Ok(())
}
