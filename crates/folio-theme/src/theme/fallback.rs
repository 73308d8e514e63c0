//! Fallback theme selection, optionally following the OS color mode.

use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::theme::{ParseThemeError, Theme};

/// The theme used when no valid preference is recorded.
///
/// Written in configuration as `"light"`, `"dark"` or `"system"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Fallback {
    /// Always the given theme.
    Fixed(Theme),
    /// Whatever the OS reports at initialization time.
    System,
}

impl Fallback {
    /// Resolves the fallback for an interactive session.
    pub fn resolve(self) -> Theme {
        match self {
            Fallback::Fixed(theme) => theme,
            Fallback::System => detect_color_mode(),
        }
    }

    /// Resolves the fallback without consulting the OS.
    ///
    /// Used in pre-render contexts, where the result must not depend on the
    /// machine doing the rendering.
    pub fn fixed(self) -> Theme {
        match self {
            Fallback::Fixed(theme) => theme,
            Fallback::System => Theme::default(),
        }
    }
}

impl Default for Fallback {
    fn default() -> Self {
        Fallback::Fixed(Theme::default())
    }
}

impl TryFrom<String> for Fallback {
    type Error = ParseThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "system" {
            return Ok(Fallback::System);
        }
        value.parse().map(Fallback::Fixed)
    }
}

impl From<Fallback> for String {
    fn from(fallback: Fallback) -> Self {
        match fallback {
            Fallback::Fixed(theme) => theme.as_str().to_string(),
            Fallback::System => "system".to_string(),
        }
    }
}

/// Probe returning the OS color mode.
pub type ThemeDetector = fn() -> Theme;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector consulted by [`Fallback::System`].
///
/// This is useful for testing or when the host knows the color mode better
/// than the OS probe does.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

pub(crate) fn detect_color_mode() -> Theme {
    let detector = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_theme_detector() -> Theme {
    match detect_os_theme() {
        OsThemeMode::Dark => Theme::Dark,
        OsThemeMode::Light => Theme::Light,
    }
}
