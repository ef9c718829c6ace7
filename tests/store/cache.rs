// tests/store/cache.rs
use std::fs;
use std::io::ErrorKind;

use crate::support::TestStore;
use json_disk_store::StoreError;
use serde_json::json;

#[tokio::test]
async fn test_cached_read_does_not_touch_disk() {
    let env = TestStore::new();
    let mut db = env.open(true);
    let key = db.write("key1", "value1").await.unwrap();

    // With the file gone, only the cache can answer
    fs::remove_file(env.file_path()).unwrap();

    assert_eq!(db.read(&key).await.unwrap(), Some(json!("value1")));
}

#[tokio::test]
async fn test_uncached_read_always_hits_disk() {
    let env = TestStore::new();
    let mut db = env.open(false);
    db.write("key1", "value1").await.unwrap();

    fs::remove_file(env.file_path()).unwrap();

    // Existence check already ran once; the reload does not recreate the file
    let err = db.read("anything").await.unwrap_err();
    assert!(matches!(err, StoreError::Io(ref e) if e.kind() == ErrorKind::NotFound));
}

#[tokio::test]
async fn test_file_content_is_in_sync_with_cache() {
    let env = TestStore::new();
    let mut db = env.open(true);

    let k1 = db.write("key1", "value1").await.unwrap();
    let k2 = db.write("key2", "value2").await.unwrap();
    db.update(&k1, "updatedValue1").await.unwrap();
    db.delete(&k2).await.unwrap();

    assert_eq!(env.file_json(), json!({ k1: "updatedValue1" }));
}

#[tokio::test]
async fn test_cached_store_loads_existing_file() {
    let env = TestStore::new();
    let key = env.open(false).write("key1", "value1").await.unwrap();

    let mut cached = env.open(true);
    assert_eq!(cached.read(&key).await.unwrap(), Some(json!("value1")));

    // The first write through the cache must keep the earlier entry
    let other = cached.write("key2", "value2").await.unwrap();
    let on_disk = env.file_json();
    assert_eq!(on_disk[&key], json!("value1"));
    assert_eq!(on_disk[&other], json!("value2"));
}

#[tokio::test]
async fn test_cached_store_does_not_see_external_writes() {
    let env = TestStore::new();
    let mut cached = env.open(true);
    let key = cached.write("key1", "value1").await.unwrap();

    let mut other = env.open(false);
    other.update(&key, "changed elsewhere").await.unwrap();

    assert_eq!(cached.read(&key).await.unwrap(), Some(json!("value1")));
}

#[tokio::test]
async fn test_uncached_store_sees_external_writes() {
    let env = TestStore::new();
    let mut first = env.open(false);
    let key = first.write("key1", "value1").await.unwrap();

    let mut second = env.open(false);
    second.update(&key, "changed elsewhere").await.unwrap();
    let added = second.write("key2", "value2").await.unwrap();

    assert_eq!(
        first.read(&key).await.unwrap(),
        Some(json!("changed elsewhere"))
    );
    assert_eq!(first.read(&added).await.unwrap(), Some(json!("value2")));
    assert!(first.delete(&added).await.unwrap());
    assert_eq!(second.read(&added).await.unwrap(), None);
}

#[tokio::test]
async fn test_uncached_store_rereads_hand_edited_file() {
    let env = TestStore::new();
    let mut db = env.open(false);
    db.read("init").await.unwrap();

    env.set_raw_contents(r#"{"manual":[1,2,3]}"#);

    assert_eq!(db.read("manual").await.unwrap(), Some(json!([1, 2, 3])));
}

#[tokio::test]
async fn test_failed_write_leaves_cache_unchanged() {
    let env = TestStore::new();
    let mut db = env.open(true);
    assert!(db.is_cached());
    let key = db.write("a", 1).await.unwrap();

    // A directory in place of the data file makes every write fail
    fs::remove_file(env.file_path()).unwrap();
    fs::create_dir(env.file_path()).unwrap();

    let err = db.write("b", 2).await.unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
    let err = db.update(&key, 3).await.unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));

    assert_eq!(db.read(&key).await.unwrap(), Some(json!(1)));

    // Once writable again, only the surviving entries are persisted
    fs::remove_dir(env.file_path()).unwrap();
    let added = db.write("c", 4).await.unwrap();

    let on_disk = env.file_json();
    let entries = on_disk.as_object().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(on_disk[&key], json!(1));
    assert_eq!(on_disk[&added], json!(4));
    assert!(entries.keys().all(|k| !k.starts_with("b-")));
}

#[tokio::test]
async fn test_uncached_store_reports_no_cache() {
    let env = TestStore::new();
    let mut db = env.open(false);
    assert!(!db.is_cached());

    db.write("a", 1).await.unwrap();
    assert!(!db.is_cached());
}

#[tokio::test]
async fn test_cached_store_on_fresh_file_starts_empty() {
    let env = TestStore::new();
    let mut db = env.open(true);

    assert_eq!(db.read("anything").await.unwrap(), None);
    assert_eq!(env.raw_contents(), "{}");
}
