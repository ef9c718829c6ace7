// src/store/mod.rs
//! `JsonDiskStore` — a JSON mapping persisted to one file
//!
//! Each operation lazily initializes the file, loads the whole mapping
//! (from memory when caching is on, from disk otherwise), mutates it and
//! rewrites the whole file.
//!
//! There is no locking. Mutating calls take `&mut self`; sharing one store
//! between tasks requires the caller to wrap it (e.g. in a `tokio::sync::Mutex`).
//! Separate instances on the same path overwrite each other's changes.

pub mod file;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::aliases::{DerivedKey, Mapping};
use crate::config::StoreOptions;
use crate::crypto::derive_key;
use crate::error::{Result, StoreError};
use crate::key_ops::generate_unique_key;

pub struct JsonDiskStore {
    file_path: PathBuf,
    use_cache: bool,
    cache: Option<Mapping>,
    initialized: bool,
    encryption_key: Option<DerivedKey>,
}

impl JsonDiskStore {
    /// Resolve the file path and derive the encryption key
    ///
    /// Touches nothing on disk; the file is created on first use.
    pub fn open(options: StoreOptions) -> Result<Self> {
        let file_path = options.resolve_path()?;
        let encryption_key = options
            .encryption_password
            .as_deref()
            .map(derive_key)
            .transpose()?;

        debug!(
            "opened store at {} (cache: {}, encrypted: {})",
            file_path.display(),
            options.use_cache,
            encryption_key.is_some()
        );

        Ok(Self {
            file_path,
            use_cache: options.use_cache,
            cache: None,
            initialized: false,
            encryption_key,
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn is_cached(&self) -> bool {
        self.use_cache
    }

    pub fn is_encrypted(&self) -> bool {
        self.encryption_key.is_some()
    }

    /// Insert `value` under `<key>-<uuid>` and return that generated key
    ///
    /// The label alone is not a valid lookup key afterwards.
    pub async fn write(&mut self, key: &str, value: impl Into<Value>) -> Result<String> {
        let mut data = self.read_mapping().await?;

        let unique_key = generate_unique_key(key);
        data.insert(unique_key.clone(), value.into());
        self.write_mapping(data).await?;

        debug!("wrote entry {unique_key}");
        Ok(unique_key)
    }

    /// Value stored under `key`, or `None`
    pub async fn read(&mut self, key: &str) -> Result<Option<Value>> {
        self.initialize().await?;

        if let Some(cache) = &self.cache {
            trace!("cache hit for {key}");
            return Ok(cache.get(key).cloned());
        }

        let mut data = self.load_from_disk().await?;
        Ok(data.remove(key))
    }

    /// [`read`](Self::read) deserialized into `T`
    pub async fn read_as<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>> {
        match self.read(key).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Replace the value of an existing entry
    ///
    /// Fails with [`StoreError::NotFound`] and leaves the file untouched when
    /// `key` is absent.
    pub async fn update(&mut self, key: &str, new_value: impl Into<Value>) -> Result<()> {
        let mut data = self.read_mapping().await?;

        match data.get_mut(key) {
            Some(slot) => *slot = new_value.into(),
            None => return Err(StoreError::NotFound(key.to_owned())),
        }

        self.write_mapping(data).await?;
        debug!("updated entry {key}");
        Ok(())
    }

    /// Remove an entry; `false` (and no write) when it was absent
    pub async fn delete(&mut self, key: &str) -> Result<bool> {
        let mut data = self.read_mapping().await?;

        if data.remove(key).is_none() {
            return Ok(false);
        }

        self.write_mapping(data).await?;
        debug!("deleted entry {key}");
        Ok(true)
    }

    /// Lazy initialization
    ///
    /// The existence check runs once per instance. With caching on, the
    /// first call also loads the cache; without it, content is reloaded by
    /// every operation instead.
    async fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }

        let created =
            file::ensure_file_exists(&self.file_path, self.encryption_key.as_ref()).await?;

        if self.use_cache {
            // A file created just now holds the empty mapping
            let data = if created {
                Mapping::new()
            } else {
                self.load_from_disk().await?
            };
            self.cache = Some(data);
        }

        self.initialized = true;
        Ok(())
    }

    async fn load_from_disk(&self) -> Result<Mapping> {
        file::read_mapping(&self.file_path, self.encryption_key.as_ref()).await
    }

    /// Working copy of the mapping for a read-modify-write cycle
    async fn read_mapping(&mut self) -> Result<Mapping> {
        self.initialize().await?;

        match &self.cache {
            Some(cache) => Ok(cache.clone()),
            None => self.load_from_disk().await,
        }
    }

    /// Persist `data`; the cache is replaced only once the file write succeeded
    async fn write_mapping(&mut self, data: Mapping) -> Result<()> {
        file::write_mapping(&self.file_path, &data, self.encryption_key.as_ref()).await?;

        if self.use_cache {
            self.cache = Some(data);
        }
        Ok(())
    }
}

impl fmt::Debug for JsonDiskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonDiskStore")
            .field("file_path", &self.file_path)
            .field("use_cache", &self.use_cache)
            .field("initialized", &self.initialized)
            .field("encrypted", &self.encryption_key.is_some())
            .finish_non_exhaustive()
    }
}
