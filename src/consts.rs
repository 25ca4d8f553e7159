// src/consts.rs
//! Shared constants: cipher parameters and on-disk layout

/// AES block size in bytes (PKCS#7 pads to this)
pub const BLOCK_SIZE_BYTES: usize = 16;

/// CBC initialization vector length in bytes
pub const IV_LEN: usize = 16;

/// Default per-file key size
pub const DEFAULT_KEY_SIZE_BITS: u32 = 256;

/// Extension of stored envelopes (`<file_id>.enc`)
pub const ENVELOPE_EXTENSION: &str = "enc";

/// Extension of stored keys (`<file_id>.key`)
pub const KEY_EXTENSION: &str = "key";

/// Blob store listing index
pub const METADATA_FILE: &str = "metadata.json";

/// Key store index
pub const KEY_INDEX_FILE: &str = "key_index.json";

pub const DEFAULT_STORAGE_DIR: &str = "./mock_cloud";
pub const DEFAULT_KEY_DIR: &str = "./keys";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Config file looked up in the working directory when `CEL_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "cel-config.toml";

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "cloud-encryption-layer";
