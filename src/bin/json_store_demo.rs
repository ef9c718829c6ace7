// src/bin/json_store_demo.rs
//! Demo — write, read, update and delete one entry
//!
//! Usage: json_store_demo [options.toml] [--encrypt]

use std::io::Write;

use anyhow::{Context, Result};
use json_disk_store::{JsonDiskStore, StoreOptions};
use rpassword::read_password;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut config_path = None;
    let mut encrypt = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--encrypt" => encrypt = true,
            _ => config_path = Some(arg),
        }
    }

    let mut options = match &config_path {
        Some(path) => StoreOptions::from_toml_file(path)
            .with_context(|| format!("Failed to load store options from {path}"))?,
        None => StoreOptions::default(),
    };

    if encrypt && options.encryption_password.is_none() {
        print!("Store password: ");
        std::io::stdout().flush()?;
        let password = read_password()?;
        options = options.with_password(password.trim_end());
    }

    let mut db = JsonDiskStore::open(options).context("Failed to open store")?;
    info!("Using {}", db.path().display());

    let key = db.write("key1", "value1").await?;
    info!("Wrote {key}");

    let value = db.read(&key).await?;
    info!("Read value: {value:?}");

    db.update(&key, "newValue").await?;
    let updated = db.read(&key).await?;
    info!("Updated value: {updated:?}");

    let deleted = db.delete(&key).await?;
    info!("Key deleted: {deleted}");

    Ok(())
}
