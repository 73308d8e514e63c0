//! In-process storage backends.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{PreferenceStorage, StorageError};

/// A shared in-memory key/value map.
///
/// Clones share the same map, so a caller can hand one clone to the store
/// and keep another to inspect what was persisted.
///
/// # Example
///
/// ```rust
/// use folio_theme::{MemoryStorage, ThemeProvider, RootFlags, Theme};
///
/// let storage = MemoryStorage::with_record("theme", "light");
/// let provider = ThemeProvider::new(storage.clone(), RootFlags::new());
/// provider.toggle();
/// assert_eq!(storage.get("theme").as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage holding a single record.
    pub fn with_record(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Returns the value under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Removes the record under `key`, as a user clearing site data would.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.entries.borrow_mut().remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage for contexts without a durable store, such as pre-rendering.
///
/// Reports itself unavailable; every operation fails with
/// [`StorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStorage;

impl PreferenceStorage for NoStorage {
    fn is_available(&self) -> bool {
        false
    }

    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let mut writer = storage.clone();
        writer.save("theme", "dark").unwrap();

        assert_eq!(storage.get("theme").as_deref(), Some("dark"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_memory_storage_save_overwrites() {
        let mut storage = MemoryStorage::with_record("theme", "light");
        storage.save("theme", "dark").unwrap();
        assert_eq!(storage.load("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_memory_storage_missing_key() {
        let storage = MemoryStorage::new();
        assert!(storage.load("theme").unwrap().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_memory_storage_remove() {
        let storage = MemoryStorage::with_record("theme", "light");
        assert_eq!(storage.remove("theme").as_deref(), Some("light"));
        assert!(storage.get("theme").is_none());
    }

    #[test]
    fn test_no_storage_is_unavailable() {
        let mut storage = NoStorage;
        assert!(!storage.is_available());
        assert!(matches!(
            storage.load("theme"),
            Err(StorageError::Unavailable)
        ));
        assert!(matches!(
            storage.save("theme", "dark"),
            Err(StorageError::Unavailable)
        ));
    }
}
