//! Browser `localStorage` backend.

use super::{PreferenceStorage, StorageError};

/// The page's `localStorage`.
///
/// Unavailable when there is no window (workers, pre-render) or the
/// browser refuses access, for example with storage disabled in settings.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStorage for LocalStorage {
    fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(browser_error)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(browser_error)
    }
}

fn browser_error(value: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Browser(format!("{value:?}"))
}
