use super::*;
use crate::storage::{FileStore, MemoryStore};
use tempfile::TempDir;

fn id(n: u32) -> GameId {
    GameId(n)
}

#[test]
fn test_starts_empty_without_payload() {
    let store = FavoritesStore::open(MemoryStore::new());
    assert!(store.is_empty());
    assert!(!store.is_favorite(id(1)));
}

#[test]
fn test_add_is_idempotent() {
    let mut store = FavoritesStore::open(MemoryStore::new());
    assert!(store.add(id(1)));
    assert!(!store.add(id(1)));
    assert_eq!(store.len(), 1);
    assert!(store.is_favorite(id(1)));
}

#[test]
fn test_remove_absent_is_noop() {
    let mut store = FavoritesStore::open(MemoryStore::new());
    assert!(!store.remove(id(7)));
    let storage = store.into_storage();
    // Nothing was written
    assert!(storage.get(FAVORITES_KEY).unwrap().is_none());
}

#[test]
fn test_toggle_twice_restores_state() {
    let mut store = FavoritesStore::open(MemoryStore::new());
    store.add(id(2));
    for n in [1, 2, 3] {
        let before = store.list();
        store.toggle(id(n));
        store.toggle(id(n));
        assert_eq!(store.list(), before);
    }
}

#[test]
fn test_toggle_reports_new_state() {
    let mut store = FavoritesStore::open(MemoryStore::new());
    assert!(store.toggle(id(5)));
    assert!(store.is_favorite(id(5)));
    assert!(!store.toggle(id(5)));
    assert!(!store.is_favorite(id(5)));
}

#[test]
fn test_add_survives_reload() {
    let mut store = FavoritesStore::open(MemoryStore::new());
    store.add(id(42));
    let reopened = FavoritesStore::open(store.into_storage());
    assert!(reopened.is_favorite(id(42)));
}

#[test]
fn test_payload_is_json_array() {
    let mut store = FavoritesStore::open(MemoryStore::new());
    store.add(id(3));
    store.add(id(1));
    let storage = store.into_storage();
    assert_eq!(
        storage.get(FAVORITES_KEY).unwrap().as_deref(),
        Some("[1,3]")
    );
}

#[test]
fn test_clear_all_persists_empty_set() {
    let mut store = FavoritesStore::open(MemoryStore::new());
    store.add(id(1));
    store.add(id(2));
    assert!(store.clear_all());
    assert!(store.list().is_empty());
    assert!(!store.clear_all());

    let reopened = FavoritesStore::open(store.into_storage());
    assert!(reopened.list().is_empty());
}

#[test]
fn test_clear_all_is_one_event() {
    let mut store = FavoritesStore::open(MemoryStore::new());
    store.add(id(1));
    store.add(id(2));
    store.add(id(3));
    let rx = store.subscribe();
    store.clear_all();
    let events: Vec<FavoriteChange> = rx.try_iter().map(|e| e.change).collect();
    assert_eq!(events, vec![FavoriteChange::Cleared { count: 3 }]);
}

#[test]
fn test_malformed_payload_loads_empty() {
    for payload in ["not json", "{\"a\":1}", "[\"x\"]", ""] {
        let mut storage = MemoryStore::new();
        storage.insert_raw(FAVORITES_KEY, payload);
        let store = FavoritesStore::open(storage);
        assert!(store.is_empty(), "payload {:?} should load empty", payload);
    }
}

#[test]
fn test_malformed_payload_replaced_on_write() {
    let mut storage = MemoryStore::new();
    storage.insert_raw(FAVORITES_KEY, "garbage");
    let mut store = FavoritesStore::open(storage);
    store.add(id(9));
    let reopened = FavoritesStore::open(store.into_storage());
    assert_eq!(reopened.list(), [id(9)].into_iter().collect::<FavoriteSet>());
}

#[test]
fn test_unreadable_storage_loads_empty() {
    let mut storage = MemoryStore::new();
    storage.insert_raw(FAVORITES_KEY, "[1]");
    storage.set_unavailable(true);
    let store = FavoritesStore::open(storage);
    assert!(store.is_empty());
}

#[test]
fn test_write_failure_keeps_memory_state() {
    let mut storage = MemoryStore::new();
    storage.set_unavailable(true);
    let mut store = FavoritesStore::open(storage);
    let rx = store.subscribe();

    assert!(store.add(id(1)));
    assert!(store.is_favorite(id(1)));
    assert!(matches!(
        store.last_persist_error(),
        Some(StorageError::Unavailable(_))
    ));

    let events: Vec<FavoriteChange> = rx.try_iter().map(|e| e.change).collect();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], FavoriteChange::Added { id: id(1) });
    assert!(matches!(events[1], FavoriteChange::PersistFailed { .. }));
}

#[test]
fn test_write_error_cleared_by_next_success() {
    let mut store = FavoritesStore::open(MemoryStore::new().with_quota(20));
    store.add(id(1));
    assert!(store.last_persist_error().is_none());

    // "favorites" plus a long array overflows the quota
    for n in 100..110 {
        store.add(id(n));
    }
    assert!(matches!(
        store.last_persist_error(),
        Some(StorageError::QuotaExceeded { .. })
    ));
    assert_eq!(store.len(), 11);

    store.clear_all();
    assert!(store.last_persist_error().is_none());
}

#[test]
fn test_subscribers_see_each_change() {
    let mut store = FavoritesStore::open(MemoryStore::new());
    let first = store.subscribe();
    let second = store.subscribe();

    store.toggle(id(4));
    store.toggle(id(4));

    let expected = vec![
        FavoriteChange::Added { id: id(4) },
        FavoriteChange::Removed { id: id(4) },
    ];
    let a: Vec<FavoriteChange> = first.try_iter().map(|e| e.change).collect();
    let b: Vec<FavoriteChange> = second.try_iter().map(|e| e.change).collect();
    assert_eq!(a, expected);
    assert_eq!(b, expected);
}

#[test]
fn test_dropped_subscriber_is_pruned() {
    let mut store = FavoritesStore::open(MemoryStore::new());
    let rx = store.subscribe();
    drop(rx);
    store.add(id(1));
    assert!(store.subscribers.is_empty());
}

#[test]
fn test_file_store_round_trip() {
    let tmp = TempDir::new().unwrap();
    let mut store = FavoritesStore::open(FileStore::new(tmp.path()));
    store.add(id(1));
    store.add(id(2));
    drop(store);

    let mut reopened = FavoritesStore::open(FileStore::new(tmp.path()));
    assert_eq!(reopened.len(), 2);
    reopened.clear_all();
    drop(reopened);

    let again = FavoritesStore::open(FileStore::new(tmp.path()));
    assert!(again.is_empty());
}

#[test]
fn test_open_with_borrowed_storage() {
    let mut storage = MemoryStore::new();
    {
        let mut store = FavoritesStore::open(&mut storage);
        store.add(id(8));
    }
    assert_eq!(storage.get(FAVORITES_KEY).unwrap().as_deref(), Some("[8]"));
}
