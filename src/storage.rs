use crate::core::{KeyValueStore, MemoryStore, StoreError};
use web_sys as web;

/// `window.localStorage` as a `KeyValueStore`.
pub struct LocalStore {
    storage: web::Storage,
}

impl KeyValueStore for LocalStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }
}

/// Local storage when the browser allows it, otherwise a session-only store.
pub fn open(window: &web::Window) -> Box<dyn KeyValueStore> {
    match window.local_storage() {
        Ok(Some(storage)) => Box::new(LocalStore { storage }),
        _ => {
            log::warn!("[store] localStorage unavailable; thoughts will not survive a reload");
            Box::new(MemoryStore::new())
        }
    }
}
