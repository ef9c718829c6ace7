// src/crypto/decrypt.rs
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecryptMut, KeyIvInit};
use zeroize::Zeroizing;

use crate::aliases::{DerivedKey, PlainText};
use crate::consts::{IV_LEN, PAYLOAD_SEPARATOR};
use crate::error::CryptoError;

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Decrypt `<iv-hex>:<ciphertext-hex>` → JSON text
pub fn decrypt_to_string(payload: &str, key: &DerivedKey) -> Result<PlainText> {
    let (iv_hex, ciphertext_hex) = payload
        .trim()
        .split_once(PAYLOAD_SEPARATOR)
        .ok_or(CryptoError::MalformedPayload)?;

    let iv = hex::decode(iv_hex)?;
    if iv.len() != IV_LEN {
        return Err(CryptoError::InvalidIvLength {
            expected: IV_LEN,
            actual: iv.len(),
        });
    }
    let ciphertext = hex::decode(ciphertext_hex)?;

    let plaintext = Aes256CbcDec::new(
        GenericArray::from_slice(&key[..]),
        GenericArray::from_slice(&iv),
    )
    .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
    .map_err(|_| CryptoError::Decrypt)?;

    Ok(Zeroizing::new(String::from_utf8(plaintext)?))
}
