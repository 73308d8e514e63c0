//! Shared store state and the toggle sequence.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::storage::{PreferenceStorage, StorageError};
use crate::target::PresentationTarget;
use crate::theme::Theme;

pub(crate) type Listener = Rc<dyn Fn(Theme)>;

pub(crate) struct StoreState {
    theme: Theme,
    key: String,
    storage: Box<dyn PreferenceStorage>,
    target: Box<dyn PresentationTarget>,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

pub(crate) type SharedState = Rc<RefCell<StoreState>>;

impl StoreState {
    pub(crate) fn init(
        config: &ThemeConfig,
        storage: Box<dyn PreferenceStorage>,
        target: Box<dyn PresentationTarget>,
    ) -> Self {
        let theme = initial_theme(config, &*storage);
        let mut state = Self {
            theme,
            key: config.storage_key.clone(),
            storage,
            target,
            listeners: Vec::new(),
            next_listener_id: 0,
        };
        state.sync_target();
        state
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn add_listener(&mut self, listener: Listener) -> u64 {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn remove_listener(&mut self, id: u64) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Clears both flags, then applies the current one.
    fn sync_target(&mut self) {
        if let Err(e) = self.target.clear_indicators() {
            tracing::warn!(error = %e, "failed to clear theme indicator");
        }
        if let Err(e) = self.target.apply_indicator(self.theme) {
            tracing::warn!(theme = %self.theme, error = %e, "failed to apply theme indicator");
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.key, self.theme.as_str()) {
            tracing::warn!(
                key = %self.key,
                theme = %self.theme,
                error = %e,
                "failed to persist theme preference"
            );
        }
    }
}

/// Flips the theme and runs its side effects, then notifies listeners.
///
/// Listeners run after the state borrow is released, so they may read,
/// subscribe or even toggle again. Each listener receives the theme current
/// at the moment it is called, so a nested toggle is never followed by a
/// stale notification.
pub(crate) fn toggle(state: &SharedState) -> Theme {
    let listeners: Vec<Listener> = {
        let mut state = state.borrow_mut();
        state.theme = state.theme.toggled();
        state.sync_target();
        state.persist();
        tracing::debug!(theme = %state.theme, "theme toggled");

        state
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    };

    for listener in listeners {
        let theme = state.borrow().theme;
        listener(theme);
    }
    state.borrow().theme
}

fn initial_theme(config: &ThemeConfig, storage: &dyn PreferenceStorage) -> Theme {
    if !storage.is_available() {
        let theme = config.fallback.fixed();
        tracing::debug!(%theme, "no durable storage, using fixed default");
        return theme;
    }

    match storage.load(&config.storage_key) {
        Ok(Some(value)) => match value.parse::<Theme>() {
            Ok(theme) => {
                tracing::debug!(%theme, "restored theme preference");
                theme
            }
            Err(e) => {
                let theme = config.fallback.resolve();
                tracing::warn!(
                    key = %config.storage_key,
                    error = %e,
                    fallback = %theme,
                    "ignoring invalid theme preference"
                );
                theme
            }
        },
        Ok(None) => {
            let theme = config.fallback.resolve();
            tracing::debug!(%theme, "no theme preference recorded");
            theme
        }
        Err(e) => read_failed(config, e),
    }
}

fn read_failed(config: &ThemeConfig, error: StorageError) -> Theme {
    let theme = config.fallback.resolve();
    tracing::warn!(
        key = %config.storage_key,
        %error,
        fallback = %theme,
        "failed to read theme preference"
    );
    theme
}
