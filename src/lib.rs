// src/lib.rs
//! cloud-encryption-layer: client-side file encryption before storage
//!
//! Features:
//! - AES-CBC (128/192/256) with PKCS#7 padding
//! - SHA-256 integrity tag over the plaintext, checked on decrypt
//! - Keys and ciphertext stored in separate local directories
//!
//! The integrity tag is not a MAC: the IV and the stored metadata are not
//! authenticated.

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod store;
pub mod vault;

// Re-export everything users need at the crate root
pub use aliases::{Iv, PlainText};
pub use config::{load as load_config, Config};
pub use crate::core::{CryptoEngine, Decrypted, Envelope, FileDecryption, FileKey};
pub use enums::{KeySize, StorageType};
pub use error::{CoreError, Result};
pub use store::{BlobStore, FileMetadata, KeyStore, UploadReceipt};
pub use vault::Vault;
