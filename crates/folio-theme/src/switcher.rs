//! The theme toggle button's view model.

use crate::store::{ThemeError, ThemeHandle};
use crate::theme::Theme;

/// Accessible label of the toggle button.
pub const TOGGLE_ARIA_LABEL: &str = "Toggle theme";

/// Icon shown on the toggle button.
///
/// The icon names the theme a click switches *to*: a sun while dark, a
/// moon while light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitcherIcon {
    Sun,
    Moon,
}

impl SwitcherIcon {
    pub fn for_theme(theme: Theme) -> Self {
        if theme.is_dark() {
            SwitcherIcon::Sun
        } else {
            SwitcherIcon::Moon
        }
    }

    /// Icon-set name, e.g. for a `lucide` icon lookup.
    pub fn name(self) -> &'static str {
        match self {
            SwitcherIcon::Sun => "sun",
            SwitcherIcon::Moon => "moon",
        }
    }
}

/// The navbar's light/dark toggle, bound to a store handle.
///
/// # Example
///
/// ```rust
/// use folio_theme::{MemoryStorage, RootFlags, SwitcherIcon, ThemeProvider, ThemeSwitcher};
///
/// let provider = ThemeProvider::new(MemoryStorage::new(), RootFlags::new());
/// let switcher = ThemeSwitcher::new(provider.handle());
///
/// assert_eq!(switcher.icon().unwrap(), SwitcherIcon::Sun);
/// switcher.click().unwrap();
/// assert_eq!(switcher.icon().unwrap(), SwitcherIcon::Moon);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeSwitcher {
    handle: ThemeHandle,
}

impl ThemeSwitcher {
    pub fn new(handle: ThemeHandle) -> Self {
        Self { handle }
    }

    pub fn icon(&self) -> Result<SwitcherIcon, ThemeError> {
        self.handle.current().map(SwitcherIcon::for_theme)
    }

    pub fn aria_label(&self) -> &'static str {
        TOGGLE_ARIA_LABEL
    }

    /// Tooltip describing what a click does.
    pub fn title(&self) -> Result<&'static str, ThemeError> {
        Ok(match self.handle.current()?.toggled() {
            Theme::Light => "Switch to light theme",
            Theme::Dark => "Switch to dark theme",
        })
    }

    pub fn click(&self) -> Result<(), ThemeError> {
        self.handle.toggle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::store::ThemeProvider;
    use crate::target::RootFlags;

    #[test]
    fn test_icon_tracks_theme() {
        let storage = MemoryStorage::with_record("theme", "light");
        let provider = ThemeProvider::new(storage, RootFlags::new());
        let switcher = ThemeSwitcher::new(provider.handle());

        assert_eq!(switcher.icon(), Ok(SwitcherIcon::Moon));
        assert_eq!(switcher.title(), Ok("Switch to dark theme"));

        switcher.click().unwrap();
        assert_eq!(switcher.icon(), Ok(SwitcherIcon::Sun));
        assert_eq!(switcher.title(), Ok("Switch to light theme"));
    }

    #[test]
    fn test_aria_label_is_constant() {
        let switcher = ThemeSwitcher::new(ThemeHandle::detached());
        assert_eq!(switcher.aria_label(), "Toggle theme");
    }

    #[test]
    fn test_detached_switcher_fails() {
        let switcher = ThemeSwitcher::new(ThemeHandle::detached());
        assert_eq!(switcher.icon(), Err(ThemeError::NotInitialized));
        assert_eq!(switcher.title(), Err(ThemeError::NotInitialized));
        assert_eq!(switcher.click(), Err(ThemeError::NotInitialized));
    }

    #[test]
    fn test_icon_names() {
        assert_eq!(SwitcherIcon::Sun.name(), "sun");
        assert_eq!(SwitcherIcon::Moon.name(), "moon");
    }
}
