//! In-memory stand-in for the page root's class list.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use super::{PresentationTarget, TargetError};
use crate::theme::Theme;

/// A shared set of flags on the page root.
///
/// Like a DOM element handle, clones refer to the same set: hand one to the
/// store and keep another to read what the styling layer would see.
///
/// # Example
///
/// ```rust
/// use folio_theme::{MemoryStorage, RootFlags, Theme, ThemeProvider};
///
/// let root = RootFlags::with_flags(["antialiased"]);
/// let provider = ThemeProvider::new(MemoryStorage::new(), root.clone());
///
/// assert_eq!(root.active_theme(), Some(Theme::Dark));
/// provider.toggle();
/// assert_eq!(root.flags(), vec!["antialiased", "light"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RootFlags {
    flags: Rc<RefCell<BTreeSet<String>>>,
}

impl RootFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a root that already carries `flags`.
    pub fn with_flags<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let root = Self::new();
        root.flags
            .borrow_mut()
            .extend(flags.into_iter().map(Into::into));
        root
    }

    /// All flags currently set, sorted.
    pub fn flags(&self) -> Vec<String> {
        self.flags.borrow().iter().cloned().collect()
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.flags.borrow().contains(flag)
    }

    /// Returns the theme whose flag is set, if exactly one is.
    pub fn active_theme(&self) -> Option<Theme> {
        let flags = self.flags.borrow();
        let mut present = Theme::ALL
            .into_iter()
            .filter(|theme| flags.contains(theme.as_str()));
        match (present.next(), present.next()) {
            (Some(theme), None) => Some(theme),
            _ => None,
        }
    }

    /// Adds an arbitrary flag, bypassing the store.
    pub fn insert(&self, flag: impl Into<String>) {
        self.flags.borrow_mut().insert(flag.into());
    }
}

impl PresentationTarget for RootFlags {
    fn clear_indicators(&mut self) -> Result<(), TargetError> {
        let mut flags = self.flags.borrow_mut();
        for theme in Theme::ALL {
            flags.remove(theme.as_str());
        }
        Ok(())
    }

    fn apply_indicator(&mut self, theme: Theme) -> Result<(), TargetError> {
        self.flags.borrow_mut().insert(theme.as_str().to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_keeps_unrelated_flags() {
        let mut root = RootFlags::with_flags(["light", "dark", "scroll-smooth"]);
        root.clear_indicators().unwrap();
        assert_eq!(root.flags(), vec!["scroll-smooth"]);
    }

    #[test]
    fn test_active_theme_requires_exactly_one() {
        let root = RootFlags::new();
        assert_eq!(root.active_theme(), None);

        root.insert("light");
        assert_eq!(root.active_theme(), Some(Theme::Light));

        root.insert("dark");
        assert_eq!(root.active_theme(), None);
    }

    #[test]
    fn test_clones_share_flags() {
        let root = RootFlags::new();
        let mut writer = root.clone();
        writer.apply_indicator(Theme::Dark).unwrap();
        assert!(root.contains("dark"));
    }
}
