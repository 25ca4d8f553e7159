// src/aliases.rs
//! Canonical buffer types used throughout cloud-encryption-layer

use zeroize::Zeroizing;

use crate::consts::IV_LEN;

pub use crate::core::key::FileKey;

/// Per-encryption CBC initialization vector
pub type Iv = [u8; IV_LEN];

/// Plaintext buffer that is wiped when dropped
pub type PlainText = Zeroizing<Vec<u8>>;
