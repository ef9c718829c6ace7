// src/config/mod.rs
//! Store configuration
//!
//! `StoreOptions` holds the four construction parameters. Build it in code
//! with the `with_*` setters, or load it from TOML.

pub use options::StoreOptions;

mod defaults;
mod options;
