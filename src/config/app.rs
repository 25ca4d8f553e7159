// src/config/app.rs
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::*;
use crate::consts::{APP_DIR_NAME, DEFAULT_CONFIG_FILE};
use crate::enums::KeySize;
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_crypto")]
    pub crypto: CryptoSettings,
    #[serde(default = "default_paths")]
    pub paths: Paths,
    #[serde(default = "default_logging")]
    pub logging: Logging,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CryptoSettings {
    pub key_size_bits: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Paths {
    pub storage_dir: PathBuf,
    pub key_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Logging {
    pub filter: String,
}

impl Default for CryptoSettings {
    fn default() -> Self {
        default_crypto()
    }
}

impl Default for Paths {
    fn default() -> Self {
        default_paths()
    }
}

impl Default for Logging {
    fn default() -> Self {
        default_logging()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crypto: default_crypto(),
            paths: default_paths(),
            logging: default_logging(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let conf: Config = toml::from_str(content)?;
        conf.key_size()?;
        Ok(conf)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Validated key size
    pub fn key_size(&self) -> Result<KeySize> {
        KeySize::try_from(self.crypto.key_size_bits)
    }

    /// Apply `CEL_STORAGE_DIR`, `CEL_KEY_DIR` and `CEL_KEY_SIZE` from `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("CEL_STORAGE_DIR") {
            self.paths.storage_dir = dir.into();
        }
        if let Some(dir) = lookup("CEL_KEY_DIR") {
            self.paths.key_dir = dir.into();
        }
        if let Some(bits) = lookup("CEL_KEY_SIZE") {
            self.crypto.key_size_bits = bits
                .trim()
                .parse()
                .map_err(|_| CoreError::Config(format!("CEL_KEY_SIZE is not a number: {bits:?}")))?;
            self.key_size()?;
        }
        Ok(())
    }
}

/// Where to look for a config file, in order
pub fn candidate_paths() -> Vec<PathBuf> {
    if let Ok(path) = std::env::var("CEL_CONFIG") {
        return vec![PathBuf::from(path)];
    }
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(APP_DIR_NAME).join("config.toml"));
    }
    paths
}

/// Read the first existing candidate (or defaults), then apply env overrides
pub fn load_uncached() -> Result<Config> {
    let mut conf = match candidate_paths().into_iter().find(|p| p.exists()) {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::from_file(&path)?
        }
        None => {
            warn!("no config file found, using built-in defaults");
            Config::default()
        }
    };
    conf.apply_env_overrides(|name| std::env::var(name).ok())?;
    Ok(conf)
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Process-wide config, loaded on first use
pub fn load() -> Result<&'static Config> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }
    let conf = load_uncached()?;
    Ok(CONFIG.get_or_init(|| conf))
}
