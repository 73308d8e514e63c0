//! # Folio Theme - light/dark preference store for a portfolio site
//!
//! `folio-theme` keeps the page's display mode, persists it across sessions
//! and mirrors it onto the page root as a `light` or `dark` flag.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_theme::{MemoryStorage, RootFlags, Theme, ThemeProvider, ThemeSwitcher};
//!
//! // One provider per page session.
//! let storage = MemoryStorage::new();
//! let root = RootFlags::new();
//! let provider = ThemeProvider::new(storage.clone(), root.clone());
//!
//! // Consumers get handles, never the provider itself.
//! let switcher = ThemeSwitcher::new(provider.handle());
//! switcher.click().unwrap();
//!
//! assert_eq!(provider.current(), Theme::Light);
//! assert_eq!(storage.get("theme").as_deref(), Some("light"));
//! assert_eq!(root.active_theme(), Some(Theme::Light));
//! ```
//!
//! ## Concepts
//!
//! - [`Theme`]: `Light` or `Dark`, nothing else
//! - [`ThemeProvider`]: owns the active theme; created once at startup
//! - [`ThemeHandle`]: a consumer's access; fails with
//!   [`ThemeError::NotInitialized`] when no provider backs it
//! - [`PreferenceStorage`]: where the `"theme"` record persists
//! - [`PresentationTarget`]: where the theme flag is applied
//!
//! ## Initialization
//!
//! The record is read once. `"light"` and `"dark"` are taken as-is; a
//! missing record, an unreadable store or any other string falls back to
//! [`ThemeConfig::fallback`] (dark by default). Without durable storage at
//! all, as when pre-rendering, the fixed default is used.
//!
//! ## Failures
//!
//! Storage and presentation failures are logged through `tracing` and
//! swallowed. The in-memory theme is authoritative for the session.
//!
//! ## Browser Use
//!
//! On `wasm32`, `LocalStorage` and `DocumentRoot` bind the store to the
//! page's `localStorage` and `<html>` class list.

pub mod config;
pub mod storage;
pub mod store;
pub mod switcher;
pub mod target;
pub mod theme;

pub use config::{ConfigError, ThemeConfig, DEFAULT_STORAGE_KEY};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{FileStorage, MemoryStorage, NoStorage, PreferenceStorage, StorageError};
pub use store::{Subscription, ThemeError, ThemeHandle, ThemeProvider};
pub use switcher::{SwitcherIcon, ThemeSwitcher, TOGGLE_ARIA_LABEL};
#[cfg(target_arch = "wasm32")]
pub use target::DocumentRoot;
pub use target::{PresentationTarget, RootFlags, TargetError};
pub use theme::{set_theme_detector, Fallback, ParseThemeError, Theme, ThemeDetector};
