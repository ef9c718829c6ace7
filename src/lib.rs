// src/lib.rs
//! json-disk-store — a minimal key-value store persisted as one JSON file
//!
//! Features:
//! - Whole-file read-modify-write on every operation
//! - Optional in-memory cache of the mapping
//! - Optional AES-256-CBC encrypt-at-rest with a scrypt-derived key
//! - Generated `<label>-<uuid>` entry keys

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod key_ops;
pub mod store;

// Re-export everything users need at the crate root
pub use aliases::Mapping;
pub use config::StoreOptions;
pub use error::{CryptoError, Result, StoreError};
pub use store::JsonDiskStore;
