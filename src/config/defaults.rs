// src/config/defaults.rs
use crate::config::app::{CryptoSettings, Logging, Paths};
use crate::consts::{DEFAULT_KEY_DIR, DEFAULT_KEY_SIZE_BITS, DEFAULT_LOG_FILTER, DEFAULT_STORAGE_DIR};

pub fn default_crypto() -> CryptoSettings {
    CryptoSettings {
        key_size_bits: DEFAULT_KEY_SIZE_BITS,
    }
}

pub fn default_paths() -> Paths {
    Paths {
        storage_dir: DEFAULT_STORAGE_DIR.into(),
        key_dir: DEFAULT_KEY_DIR.into(),
    }
}

pub fn default_logging() -> Logging {
    Logging {
        filter: DEFAULT_LOG_FILTER.into(),
    }
}
