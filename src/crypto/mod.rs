// src/crypto/mod.rs
//! Pure cryptographic operations — no I/O
//!
//! All functions work exclusively on in-memory strings. The store applies
//! them to the whole serialized mapping as one opaque blob.
mod decrypt;
mod encrypt;
mod kdf;

pub use decrypt::decrypt_to_string;
pub use encrypt::{encrypt_to_string, generate_iv};
pub use kdf::derive_key;

use zeroize::Zeroizing;

use crate::aliases::{DerivedKey, PlainText};
use crate::error::CryptoError;

/// Encrypt if a key is configured, otherwise pass the text through
pub fn seal(plaintext: &str, key: Option<&DerivedKey>) -> String {
    match key {
        Some(key) => encrypt_to_string(plaintext, key),
        None => plaintext.to_owned(),
    }
}

/// Inverse of [`seal`]
pub fn unseal(payload: String, key: Option<&DerivedKey>) -> Result<PlainText, CryptoError> {
    match key {
        Some(key) => decrypt_to_string(&payload, key),
        None => Ok(Zeroizing::new(payload)),
    }
}
