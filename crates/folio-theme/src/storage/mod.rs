//! Durable storage for the preference record.
//!
//! The store talks to storage through [`PreferenceStorage`], a plain
//! string key/value interface. Backends:
//!
//! - [`MemoryStorage`]: shared in-process map, for tests and embedding
//! - [`FileStorage`]: JSON file on disk, for native hosts
//! - [`NoStorage`]: pre-render contexts with no durable store at all
//! - `LocalStorage`: the browser's `localStorage` (wasm32 only)
//!
//! Failures are reported as [`StorageError`] but the store never lets
//! them escape: losing persistence must not break the page.

mod error;
mod file;
mod memory;
#[cfg(target_arch = "wasm32")]
mod web;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::{MemoryStorage, NoStorage};
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;

/// Key/value string storage that survives process restarts.
pub trait PreferenceStorage {
    /// Returns `false` when no durable store exists in this environment.
    ///
    /// The store skips reading entirely and uses the fixed default.
    fn is_available(&self) -> bool {
        true
    }

    /// Reads the value under `key`, `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for Box<S> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}
