use super::*;
use tempfile::TempDir;

#[test]
fn test_file_store_missing_key_is_none() {
    let tmp = TempDir::new().unwrap();
    let store = FileStore::new(tmp.path().join("data"));
    assert!(store.get("favorites").unwrap().is_none());
}

#[test]
fn test_file_store_set_get_remove() {
    let tmp = TempDir::new().unwrap();
    let mut store = FileStore::new(tmp.path().join("data"));

    store.set("favorites", "[1,2]").unwrap();
    assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[1,2]"));
    assert!(tmp.path().join("data").join("favorites.json").exists());

    store.set("favorites", "[3]").unwrap();
    assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[3]"));

    store.remove("favorites").unwrap();
    assert!(store.get("favorites").unwrap().is_none());
    // Removing again is fine
    store.remove("favorites").unwrap();
}

#[test]
fn test_file_store_leaves_no_temp_files() {
    let tmp = TempDir::new().unwrap();
    let mut store = FileStore::new(tmp.path().join("data"));
    for n in 0..5 {
        store.set("favorites", &format!("[{}]", n)).unwrap();
    }
    let names: Vec<_> = std::fs::read_dir(tmp.path().join("data"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("favorites.json")]);
}

#[test]
fn test_file_store_concurrent_writers_never_tear() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("data");
    let payloads: Vec<String> = (0..4)
        .map(|n| format!("[{}]", vec![n.to_string(); 2000].join(",")))
        .collect();

    std::thread::scope(|scope| {
        for payload in &payloads {
            let mut store = FileStore::new(&dir);
            scope.spawn(move || {
                for _ in 0..20 {
                    store.set("favorites", payload).unwrap();
                }
            });
        }
    });

    let stored = FileStore::new(&dir).get("favorites").unwrap().unwrap();
    assert!(payloads.contains(&stored));
}

#[test]
fn test_file_store_rejects_path_like_keys() {
    let tmp = TempDir::new().unwrap();
    let mut store = FileStore::new(tmp.path());
    assert!(matches!(
        store.set("../escape", "x"),
        Err(StorageError::InvalidKey(_))
    ));
    assert!(matches!(store.get(""), Err(StorageError::InvalidKey(_))));
}

#[test]
fn test_memory_store_quota() {
    let mut store = MemoryStore::new().with_quota(16);
    store.set("k", "0123456789").unwrap();
    // Replacing a value only counts the new size
    store.set("k", "abcdefghijklmno").unwrap();
    let err = store.set("k", "this payload is far too long").unwrap_err();
    assert!(matches!(err, StorageError::QuotaExceeded { .. }));
    assert_eq!(store.get("k").unwrap().as_deref(), Some("abcdefghijklmno"));
}

#[test]
fn test_memory_store_unavailable() {
    let mut store = MemoryStore::new();
    store.set("k", "v").unwrap();
    store.set_unavailable(true);
    assert!(matches!(store.get("k"), Err(StorageError::Unavailable(_))));
    assert!(matches!(store.set("k", "w"), Err(StorageError::Unavailable(_))));
    store.set_unavailable(false);
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}
