// src/crypto/encrypt.rs
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncryptMut, KeyIvInit};
use rand::RngCore;

use crate::aliases::DerivedKey;
use crate::consts::{IV_LEN, PAYLOAD_SEPARATOR};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// Generate a fresh random CBC initialization vector
pub fn generate_iv() -> [u8; IV_LEN] {
    let mut iv = [0u8; IV_LEN];
    rand::rng().fill_bytes(&mut iv);
    iv
}

/// Encrypt JSON text → `<iv-hex>:<ciphertext-hex>` (AES-256-CBC, PKCS#7)
///
/// A new IV is drawn on every call, so equal inputs never produce equal payloads.
pub fn encrypt_to_string(plaintext: &str, key: &DerivedKey) -> String {
    let iv = generate_iv();
    let ciphertext = Aes256CbcEnc::new(
        GenericArray::from_slice(&key[..]),
        GenericArray::from_slice(&iv),
    )
    .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    format!(
        "{}{}{}",
        hex::encode(iv),
        PAYLOAD_SEPARATOR,
        hex::encode(ciphertext)
    )
}
