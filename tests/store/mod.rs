// tests/store/mod.rs

#[cfg(test)]
mod cache;
