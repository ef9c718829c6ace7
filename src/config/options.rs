// src/config/options.rs
use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use super::defaults::*;
use crate::error::Result;

/// Construction parameters for [`JsonDiskStore`](crate::JsonDiskStore)
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreOptions {
    /// Base name of the persisted file
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Directory holding the file; current working directory when absent
    #[serde(default)]
    pub directory: Option<PathBuf>,
    /// Keep the mapping in memory across calls
    #[serde(default = "default_use_cache")]
    pub use_cache: bool,
    /// Enables encrypt-at-rest when present
    #[serde(default)]
    pub encryption_password: Option<String>,
}

impl StoreOptions {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Self::default()
        }
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.use_cache = enabled;
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.encryption_password = Some(password.into());
        self
    }

    /// Parse options from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file on disk
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Absolute path of the backing file
    ///
    /// Relative directories are resolved against the current working directory;
    /// `.` and `..` components are folded away lexically.
    pub fn resolve_path(&self) -> io::Result<PathBuf> {
        let base = match &self.directory {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => std::env::current_dir()?.join(dir),
            None => std::env::current_dir()?,
        };
        Ok(normalize(&base.join(&self.file_name)))
    }
}

/// Lexical normalization of an absolute path (no filesystem access)
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            directory: None,
            use_cache: default_use_cache(),
            encryption_password: None,
        }
    }
}

impl fmt::Debug for StoreOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreOptions")
            .field("file_name", &self.file_name)
            .field("directory", &self.directory)
            .field("use_cache", &self.use_cache)
            .field(
                "encryption_password",
                &self.encryption_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
