// src/core/mod.rs
pub mod crypto;
pub mod envelope;
pub mod file;
pub mod key;
pub mod util;

pub use crypto::CryptoEngine;
pub use envelope::{Decrypted, Envelope, FileDecryption};
pub use key::{key_representations, FileKey, KeyRepr};
pub use util::{digests_match, sha256_hex, write_atomic};

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
