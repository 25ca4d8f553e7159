// src/core/crypto/mod.rs
//! Pure cryptographic operations: no I/O, no persistence
//!
//! All functions work exclusively on in-memory buffers.
mod cipher;
mod engine;

pub use engine::CryptoEngine;
