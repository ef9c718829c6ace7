// src/aliases.rs
//! Canonical types used throughout json-disk-store
//!
//! Secret material is wrapped in `Zeroizing<>` so it is scrubbed on drop.

use zeroize::Zeroizing;

use crate::consts::KEY_LEN;

/// Decoded store contents: entry key → arbitrary JSON value
pub type Mapping = serde_json::Map<String, serde_json::Value>;

/// 256-bit AES key derived from the store password
pub type DerivedKey = Zeroizing<[u8; KEY_LEN]>;

/// Decrypted JSON text of the whole store
pub type PlainText = Zeroizing<String>;
