// src/store/file.rs
//! Whole-file persistence of the mapping
//!
//! Every call reads or rewrites the entire file; there is no partial I/O.
//! Encryption is applied through `crypto::seal`/`unseal` so these helpers
//! behave the same with or without a key.

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::aliases::{DerivedKey, Mapping};
use crate::consts::EMPTY_MAPPING;
use crate::crypto::{seal, unseal};
use crate::error::Result;

/// Create the file holding an empty mapping if it does not exist yet
///
/// Returns `true` when the file was created by this call.
pub async fn ensure_file_exists(path: &Path, key: Option<&DerivedKey>) -> Result<bool> {
    match fs::metadata(path).await {
        Ok(_) => return Ok(false),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, seal(EMPTY_MAPPING, key)).await?;
    debug!("created store file {}", path.display());
    Ok(true)
}

/// Read, decrypt and parse the file
///
/// Blank content decodes to an empty mapping.
pub async fn read_mapping(path: &Path, key: Option<&DerivedKey>) -> Result<Mapping> {
    let content = fs::read_to_string(path).await?;
    let text = unseal(content, key)?;
    if text.trim().is_empty() {
        return Ok(Mapping::new());
    }
    let data: Mapping = serde_json::from_str(&text)?;
    debug!("loaded {} entries from {}", data.len(), path.display());
    Ok(data)
}

/// Serialize, encrypt and overwrite the file
// No temp-file-and-rename: a crash mid-write can leave a truncated file.
pub async fn write_mapping(path: &Path, data: &Mapping, key: Option<&DerivedKey>) -> Result<()> {
    let text = serde_json::to_string(data)?;
    fs::write(path, seal(&text, key)).await?;
    debug!("persisted {} entries to {}", data.len(), path.display());
    Ok(())
}
