//! The light/dark display mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The active display mode of the page.
///
/// Serialized, displayed and persisted as the lowercase strings `"light"`
/// and `"dark"`.
///
/// # Example
///
/// ```rust
/// use folio_theme::Theme;
///
/// let theme: Theme = "light".parse().unwrap();
/// assert_eq!(theme.toggled(), Theme::Dark);
/// assert_eq!(theme.toggled().as_str(), "dark");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    /// The fixed default when nothing valid is recorded.
    #[default]
    Dark,
}

impl Theme {
    /// Both themes, in declaration order.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Returns the record value and presentation flag for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns `true` for [`Theme::Dark`].
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Returns `true` for [`Theme::Light`].
    pub fn is_light(self) -> bool {
        matches!(self, Theme::Light)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme {value:?}, expected \"light\" or \"dark\"")]
pub struct ParseThemeError {
    value: String,
}

impl ParseThemeError {
    pub(crate) fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Matching is exact: no trimming, no case folding.
impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError::new(other)),
        }
    }
}
