//! The theme preference store.
//!
//! One [`ThemeProvider`] is created at application start and owns the
//! active theme, the durable storage and the presentation target.
//! Consumers never touch those directly: they receive a [`ThemeHandle`]
//! and read, toggle or subscribe through it.
//!
//! # Lifecycle
//!
//! 1. [`ThemeProvider::with_config`] reads the preference record once,
//!    normalizes it to a [`Theme`](crate::Theme) and syncs the page root.
//! 2. Each toggle flips the theme, updates the page root, overwrites the
//!    record, and notifies listeners, all before returning.
//! 3. Dropping the provider ends the session; outstanding handles then
//!    fail with [`ThemeError::NotInitialized`].
//!
//! Everything runs on the page's single UI thread, so the store is built
//! on `Rc`/`RefCell` and is neither `Send` nor `Sync`.

mod error;
mod handle;
mod provider;
mod state;

pub use error::ThemeError;
pub use handle::{Subscription, ThemeHandle};
pub use provider::ThemeProvider;
