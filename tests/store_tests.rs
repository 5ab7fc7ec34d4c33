// Host-side tests for the note list persistence adapter.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod store {
    include!("../src/core/store.rs");
}

use store::*;

const KEY: &str = "thoughts";

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Backend("SecurityError".into()))
    }
    fn write(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("QuotaExceededError".into()))
    }
}

fn seeded(raw: &str) -> MemoryStore {
    let mut backend = MemoryStore::new();
    backend.write(KEY, raw).unwrap();
    backend
}

#[test]
fn missing_key_loads_empty() {
    let store = NoteStore::load(MemoryStore::new(), KEY);
    assert!(store.texts().is_empty());
}

#[test]
fn pushes_survive_a_reload() {
    let mut store = NoteStore::load(MemoryStore::new(), KEY);
    store.push("hello").unwrap();
    store.push("world").unwrap();
    assert_eq!(
        store.backend().read(KEY).unwrap().as_deref(),
        Some(r#"["hello","world"]"#)
    );

    let reloaded = NoteStore::load(store.backend().clone(), KEY);
    assert_eq!(reloaded.texts(), ["hello", "world"]);
}

#[test]
fn remove_all_drops_every_copy() {
    let mut store = NoteStore::load(MemoryStore::new(), KEY);
    for t in ["hello", "keep", "hello"] {
        store.push(t).unwrap();
    }
    assert_eq!(store.remove_all("hello").unwrap(), 2);
    assert_eq!(store.texts(), ["keep"]);
    assert_eq!(store.remove_all("absent").unwrap(), 0);

    let reloaded = NoteStore::load(store.backend().clone(), KEY);
    assert_eq!(reloaded.texts(), ["keep"]);
}

#[test]
fn reads_lists_written_by_the_page() {
    let store = NoteStore::load(seeded(r#"["first thought","emoji ✨"]"#), KEY);
    assert_eq!(store.texts(), ["first thought", "emoji ✨"]);
}

#[test]
fn corrupt_or_null_values_degrade_to_empty() {
    for raw in ["not json", "{\"a\":1}", "[1,2,3]", "null", ""] {
        let store = NoteStore::load(seeded(raw), KEY);
        assert!(store.texts().is_empty(), "value {:?}", raw);
    }

    let mut store = NoteStore::load(seeded("garbage"), KEY);
    store.push("fresh").unwrap();
    assert_eq!(
        store.backend().read(KEY).unwrap().as_deref(),
        Some(r#"["fresh"]"#)
    );
}

#[test]
fn backend_failures_keep_the_session_list() {
    let mut store = NoteStore::load(BrokenStore, KEY);
    assert!(store.texts().is_empty());
    let err = store.push("still here").unwrap_err();
    assert!(matches!(err, StoreError::Backend(_)));
    assert_eq!(store.texts(), ["still here"]);
    assert!(store.remove_all("still here").is_err());
    assert!(store.texts().is_empty());
}

#[test]
fn boxed_backends_work_as_stores() {
    let backend: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
    let mut store = NoteStore::load(backend, KEY);
    store.push("boxed").unwrap();
    assert_eq!(
        store.backend().read(KEY).unwrap().as_deref(),
        Some(r#"["boxed"]"#)
    );
}
