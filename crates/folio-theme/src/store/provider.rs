//! The owning store instance.

use std::cell::RefCell;
use std::rc::Rc;

use super::handle::{Subscription, ThemeHandle};
use super::state::{self, SharedState, StoreState};
use crate::config::ThemeConfig;
use crate::storage::PreferenceStorage;
use crate::target::PresentationTarget;
use crate::theme::Theme;

/// Owner of the active theme for one page session.
///
/// Create exactly one at startup, then pass [`handle`](Self::handle)s to
/// every consumer. While the provider is alive its handles are active;
/// once it is dropped they fail with
/// [`ThemeError::NotInitialized`](super::ThemeError::NotInitialized).
///
/// # Example
///
/// ```rust
/// use folio_theme::{MemoryStorage, RootFlags, Theme, ThemeProvider};
///
/// let storage = MemoryStorage::new();
/// let root = RootFlags::new();
/// let provider = ThemeProvider::new(storage.clone(), root.clone());
///
/// // Nothing recorded: the fixed default applies.
/// assert_eq!(provider.current(), Theme::Dark);
///
/// provider.toggle();
/// assert_eq!(provider.current(), Theme::Light);
/// assert_eq!(storage.get("theme").as_deref(), Some("light"));
/// assert_eq!(root.active_theme(), Some(Theme::Light));
/// ```
pub struct ThemeProvider {
    state: SharedState,
}

impl ThemeProvider {
    /// Initializes a store with the default configuration.
    pub fn new<S, T>(storage: S, target: T) -> Self
    where
        S: PreferenceStorage + 'static,
        T: PresentationTarget + 'static,
    {
        Self::with_config(ThemeConfig::default(), storage, target)
    }

    /// Initializes a store with an explicit configuration.
    ///
    /// Reads the preference record once, falls back per
    /// [`ThemeConfig::fallback`] when it is missing or invalid, and applies
    /// the resulting theme to `target`. Storage failures are logged, never
    /// returned.
    pub fn with_config<S, T>(config: ThemeConfig, storage: S, target: T) -> Self
    where
        S: PreferenceStorage + 'static,
        T: PresentationTarget + 'static,
    {
        let state = StoreState::init(&config, Box::new(storage), Box::new(target));
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Returns the active theme.
    pub fn current(&self) -> Theme {
        self.state.borrow().theme()
    }

    /// Switches to the other theme.
    ///
    /// Updates the page root, overwrites the preference record and notifies
    /// listeners before returning. Storage and target failures are logged
    /// and otherwise ignored; the in-memory theme always flips.
    pub fn toggle(&self) {
        state::toggle(&self.state);
    }

    /// Returns a handle for a consumer.
    pub fn handle(&self) -> ThemeHandle {
        ThemeHandle::attached(&self.state)
    }

    /// Registers `listener` to receive the new theme after every toggle.
    ///
    /// The listener is unregistered when the returned [`Subscription`] is
    /// dropped, so keep it for as long as the consumer needs updates.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Theme) + 'static,
    {
        let id = self.state.borrow_mut().add_listener(Rc::new(listener));
        Subscription::new(&self.state, id)
    }

    /// The key the preference record is stored under.
    pub fn storage_key(&self) -> String {
        self.state.borrow().key().to_string()
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listener_count()
    }
}

impl std::fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ThemeProvider")
            .field("theme", &state.theme())
            .field("key", &state.key())
            .field("listeners", &state.listener_count())
            .finish()
    }
}
