//! Consumer-side access to a provider.

use std::rc::{Rc, Weak};

use super::error::ThemeError;
use super::state::{self, StoreState};
use crate::theme::Theme;

type WeakState = Weak<std::cell::RefCell<StoreState>>;

/// A consumer's view of a [`ThemeProvider`](super::ThemeProvider).
///
/// Handles are cheap to clone and do not keep the store alive. A handle
/// that was never attached ([`ThemeHandle::detached`], or `Default`) or
/// whose provider has been dropped fails every operation with
/// [`ThemeError::NotInitialized`].
///
/// # Example
///
/// ```rust
/// use folio_theme::{MemoryStorage, RootFlags, Theme, ThemeError, ThemeHandle, ThemeProvider};
///
/// let provider = ThemeProvider::new(MemoryStorage::new(), RootFlags::new());
/// let handle = provider.handle();
/// handle.toggle()?;
/// assert_eq!(handle.current()?, Theme::Light);
///
/// let stray = ThemeHandle::detached();
/// assert_eq!(stray.current(), Err(ThemeError::NotInitialized));
/// # Ok::<(), ThemeError>(())
/// ```
#[derive(Clone, Default)]
pub struct ThemeHandle {
    state: WeakState,
}

impl ThemeHandle {
    pub(crate) fn attached(state: &Rc<std::cell::RefCell<StoreState>>) -> Self {
        Self {
            state: Rc::downgrade(state),
        }
    }

    /// Creates a handle bound to no store.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Returns `true` while the originating provider is alive.
    pub fn is_active(&self) -> bool {
        self.state.strong_count() > 0
    }

    /// Returns the active theme.
    pub fn current(&self) -> Result<Theme, ThemeError> {
        let state = self.upgrade()?;
        let theme = state.borrow().theme();
        Ok(theme)
    }

    /// Switches to the other theme. See [`ThemeProvider::toggle`](super::ThemeProvider::toggle).
    pub fn toggle(&self) -> Result<(), ThemeError> {
        let state = self.upgrade()?;
        state::toggle(&state);
        Ok(())
    }

    /// Registers `listener` to receive the new theme after every toggle.
    ///
    /// The listener is unregistered when the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe<F>(&self, listener: F) -> Result<Subscription, ThemeError>
    where
        F: Fn(Theme) + 'static,
    {
        let state = self.upgrade()?;
        let id = state.borrow_mut().add_listener(Rc::new(listener));
        Ok(Subscription::new(&state, id))
    }

    fn upgrade(&self) -> Result<Rc<std::cell::RefCell<StoreState>>, ThemeError> {
        self.state.upgrade().ok_or(ThemeError::NotInitialized)
    }
}

impl std::fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeHandle")
            .field("active", &self.is_active())
            .finish()
    }
}

/// A registered change listener.
///
/// The listener stays registered while the `Subscription` is alive.
/// Dropping it, or calling [`cancel`](Self::cancel), unregisters it.
#[derive(Debug)]
#[must_use = "dropping a Subscription unregisters its listener"]
pub struct Subscription {
    state: WeakState,
    id: u64,
}

impl Subscription {
    pub(crate) fn new(state: &Rc<std::cell::RefCell<StoreState>>, id: u64) -> Self {
        Self {
            state: Rc::downgrade(state),
            id,
        }
    }

    /// Unregisters the listener. Returns `false` if the store is gone.
    pub fn cancel(self) -> bool {
        self.unregister()
    }

    fn unregister(&self) -> bool {
        let Some(state) = self.state.upgrade() else {
            return false;
        };
        let Ok(mut inner) = state.try_borrow_mut() else {
            return false;
        };
        inner.remove_listener(self.id)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unregister();
    }
}
