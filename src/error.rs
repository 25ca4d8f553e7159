// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Filesystem failure; the original `io::Error` (and its kind) is kept intact.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("entropy source unavailable: {0}")]
    EntropySource(String),

    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("unsupported key size: {0} bits (expected 128, 192 or 256)")]
    UnsupportedKeySize(u32),

    /// Ciphertext could not be unpadded: wrong key or corrupted data.
    #[error("invalid padding: wrong key or corrupted ciphertext")]
    Padding,

    #[error("invalid base64 encoding: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("invalid IV length: expected 16 bytes, got {0}")]
    InvalidIvLength(usize),

    #[error("decrypted text is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("encryption key not found for file ID: {0}")]
    KeyNotFound(String),

    #[error("encrypted file not found for file ID: {0}")]
    EnvelopeNotFound(String),

    #[error("invalid file ID: {0:?}")]
    InvalidFileId(String),

    #[error("envelope is missing `{0}`")]
    MissingMetadata(&'static str),
}

impl CoreError {
    /// True for every "nothing stored under that name" condition, including raw I/O.
    pub fn is_not_found(&self) -> bool {
        match self {
            CoreError::Io(err) => err.kind() == std::io::ErrorKind::NotFound,
            CoreError::KeyNotFound(_) | CoreError::EnvelopeNotFound(_) => true,
            _ => false,
        }
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
