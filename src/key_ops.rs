// src/key_ops.rs
//! Entry key generation
//!
//! `write` never stores under the caller's label directly; it appends a
//! random v4 UUID so repeated writes with the same label never collide.

use uuid::Uuid;

use crate::consts::UNIQUE_KEY_SEPARATOR;

/// Build `<label>-<uuid-v4>`
#[inline]
pub fn generate_unique_key(label: &str) -> String {
    format!("{label}{UNIQUE_KEY_SEPARATOR}{}", Uuid::new_v4())
}
