//! Theme values and fallback resolution.
//!
//! This module provides:
//!
//! - [`Theme`]: The closed light/dark enumeration
//! - [`Fallback`]: What to use when no valid preference is recorded
//! - [`set_theme_detector`]: Override for the OS color-mode probe
//!
//! Stored strings are normalized into [`Theme`] once, at initialization.
//! Past that point an invalid theme cannot be represented.

mod fallback;
#[allow(clippy::module_inception)]
mod theme;

pub use fallback::{set_theme_detector, Fallback, ThemeDetector};
pub use theme::{ParseThemeError, Theme};
