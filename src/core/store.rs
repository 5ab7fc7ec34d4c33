use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failed: {0}")]
    Backend(String),
    #[error("failed to encode note list: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Host key-value storage holding string values.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-local store used in tests and when the browser has no storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

/// Ordered list of note texts mirrored into one key of a `KeyValueStore`.
///
/// The value is a JSON array of strings. Every mutation rewrites the whole
/// array, so the in-memory list and the stored value never drift apart.
pub struct NoteStore<S> {
    backend: S,
    key: String,
    texts: Vec<String>,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Read the list from `backend`. A missing, unreadable or malformed value
    /// yields an empty list.
    pub fn load(backend: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let texts = match backend.read(&key) {
            Ok(Some(raw)) => decode(&raw).unwrap_or_else(|e| {
                log::warn!("[store] discarding unreadable '{}': {}", key, e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("[store] read of '{}' failed: {}", key, e);
                Vec::new()
            }
        };
        Self {
            backend,
            key,
            texts,
        }
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Append and persist. The in-memory list keeps the text even if the write fails.
    pub fn push(&mut self, text: &str) -> Result<(), StoreError> {
        self.texts.push(text.to_string());
        self.save()
    }

    /// Drop every entry equal to `text` and persist. Returns how many were removed.
    pub fn remove_all(&mut self, text: &str) -> Result<usize, StoreError> {
        let before = self.texts.len();
        self.texts.retain(|t| t != text);
        let removed = before - self.texts.len();
        self.save()?;
        Ok(removed)
    }

    fn save(&mut self) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(&self.texts)?;
        self.backend.write(&self.key, &encoded)
    }
}

// `null` is what the page stores if it ever serialized an absent list.
fn decode(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    let texts: Option<Vec<String>> = serde_json::from_str(raw)?;
    Ok(texts.unwrap_or_default())
}
