// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Raised by `update` when the target key is absent
    #[error("Key \"{0}\" not found")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Crypto operation failed: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Invalid store options: {0}")]
    Config(#[from] toml::de::Error),
}

/// Failures of the encrypt-at-rest layer
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("key derivation failed")]
    KeyDerivation,

    #[error("malformed payload: expected `<iv-hex>:<ciphertext-hex>`")]
    MalformedPayload,

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid IV length: expected {expected}, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("decryption failed - wrong password or corrupted file")]
    Decrypt,

    #[error("decrypted data is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
