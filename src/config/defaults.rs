// src/config/defaults.rs
use crate::consts::DEFAULT_FILE_NAME;

pub fn default_file_name() -> String {
    DEFAULT_FILE_NAME.into()
}

pub fn default_use_cache() -> bool {
    false
}
