use super::*;

#[test]
fn save_then_load_json_value() {
    let storage = MemoryStorage::default();
    save_json(&storage, "k", &vec![1, 2, 3]).expect("save");
    assert_eq!(load_json::<_, Vec<i32>>(&storage, "k"), Some(vec![1, 2, 3]));
}

#[test]
fn load_json_ignores_malformed_values() {
    let storage = MemoryStorage::default();
    storage.set("k", "{not json").expect("set");
    assert_eq!(load_json::<_, Vec<i32>>(&storage, "k"), None);
}

#[test]
fn rejecting_storage_refuses_only_its_key() {
    let storage = MemoryStorage::rejecting("user");
    assert!(storage.set("token", "t").is_ok());
    assert_eq!(storage.set("user", "{}"), Err(StorageError::WriteRejected("user".to_owned())));
    assert!(storage.contains("token"));
    assert!(!storage.contains("user"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_off_browser() {
    let storage = BrowserStorage;
    assert_eq!(storage.get("token"), None);
    assert_eq!(storage.set("token", "t"), Err(StorageError::Unavailable));
    storage.remove("token");
}
