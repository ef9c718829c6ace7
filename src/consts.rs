// src/consts.rs
//! Shared constants — security parameters and defaults

/// AES-256 key length in bytes
pub const KEY_LEN: usize = 32;

/// AES block-sized CBC initialization vector
pub const IV_LEN: usize = 16;

/// scrypt cost parameters (N = 2^14, r = 8, p = 1)
// Changing any of these makes existing encrypted files unreadable
pub const SCRYPT_LOG_N: u8 = 14;
pub const SCRYPT_R: u32 = 8;
pub const SCRYPT_P: u32 = 1;

/// Fixed KDF salt — the same password must always yield the same key
pub const KDF_SALT: &[u8] = b"salt";

/// Separator between the hex IV and the hex ciphertext on disk
pub const PAYLOAD_SEPARATOR: char = ':';

/// Separator between a caller label and the generated token
pub const UNIQUE_KEY_SEPARATOR: char = '-';

/// Serialized form of an empty store
pub const EMPTY_MAPPING: &str = "{}";

/// File name used when none is configured
pub const DEFAULT_FILE_NAME: &str = "data.json";
