// src/config/mod.rs
//! Configuration system for cloud-encryption-layer
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{candidate_paths, load, load_uncached, Config, CryptoSettings, Logging, Paths};

mod app;
mod defaults;
