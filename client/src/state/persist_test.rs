use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::default();
    assert_eq!(store.get("k"), None);
    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn memory_store_clear_drops_everything() {
    let store = MemoryStore::default();
    store.set("a", "1");
    store.set("b", "2");
    store.clear();
    assert_eq!(store.get("a"), None);
    assert_eq!(store.get("b"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_inert_outside_browser() {
    let store = BrowserStore::new(StorageArea::Local);
    store.set("auth-storage", "x");
    assert_eq!(store.get("auth-storage"), None);
}

// =============================================================
// Flag encoding
// =============================================================

#[test]
fn encode_flag_uses_state_envelope() {
    let raw = encode_flag("darkMode", true);
    let value: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value, json!({ "state": { "darkMode": true }, "version": 0 }));
}

#[test]
fn decode_flag_reads_envelope_and_bare_bool() {
    assert_eq!(decode_flag(r#"{"state":{"authenticated":true},"version":0}"#, "authenticated"), Some(true));
    assert_eq!(decode_flag("false", "authenticated"), Some(false));
}

#[test]
fn decode_flag_rejects_garbage() {
    assert_eq!(decode_flag("not json", "authenticated"), None);
    assert_eq!(decode_flag(r#"{"state":{}}"#, "authenticated"), None);
    assert_eq!(decode_flag(r#"{"state":{"authenticated":"yes"}}"#, "authenticated"), None);
    assert_eq!(decode_flag("1", "authenticated"), None);
}

// =============================================================
// PersistedFlag
// =============================================================

#[test]
fn flag_defaults_to_false() {
    let flag = PersistedFlag::load(MemoryStore::shared(), "auth-storage", "authenticated");
    assert!(!flag.get());
    assert_eq!(flag.key(), "auth-storage");
}

#[test]
fn flag_set_writes_through() {
    let store = MemoryStore::shared();
    let mut flag = PersistedFlag::load(store.clone(), "auth-storage", "authenticated");
    flag.set(true);
    assert_eq!(decode_flag(&store.get("auth-storage").unwrap(), "authenticated"), Some(true));
}

#[test]
fn flag_toggle_twice_round_trips_and_survives_reload() {
    let store = MemoryStore::shared();
    let mut flag = PersistedFlag::load(store.clone(), "dark-storage", "darkMode");
    assert!(flag.toggle());
    assert!(!flag.toggle());
    assert!(flag.toggle());

    let reloaded = PersistedFlag::load(store, "dark-storage", "darkMode");
    assert!(reloaded.get());
}

#[test]
fn flag_ignores_corrupt_stored_value() {
    let store = MemoryStore::shared();
    store.set("dark-storage", "{broken");
    let flag = PersistedFlag::load(store, "dark-storage", "darkMode");
    assert!(!flag.get());
}
