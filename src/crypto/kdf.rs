// src/crypto/kdf.rs
use scrypt::{scrypt, Params};
use zeroize::Zeroizing;

use crate::aliases::DerivedKey;
use crate::consts::{KDF_SALT, KEY_LEN, SCRYPT_LOG_N, SCRYPT_P, SCRYPT_R};
use crate::error::CryptoError;

/// Derive the 256-bit store key from a password (scrypt, fixed salt)
///
/// Deterministic: reopening a store with the same password yields the same key.
pub fn derive_key(password: &str) -> Result<DerivedKey, CryptoError> {
    let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, KEY_LEN)
        .map_err(|_| CryptoError::KeyDerivation)?;

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    scrypt(password.as_bytes(), KDF_SALT, &params, &mut key[..])
        .map_err(|_| CryptoError::KeyDerivation)?;
    Ok(key)
}
