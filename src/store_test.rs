use super::*;

#[test]
fn memory_store_returns_none_for_missing_key() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme"), None);
    assert!(store.is_empty());
}

#[test]
fn memory_store_overwrites_existing_value() {
    let store = MemoryStore::with_entries(&[("theme", "dark")]);
    store.set("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let other = store.clone();
    other.set("blurEffect", "false");
    assert_eq!(store.get("blurEffect").as_deref(), Some("false"));
}
