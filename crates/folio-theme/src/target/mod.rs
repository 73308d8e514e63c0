//! Presentation targets: where the active theme becomes visible.
//!
//! The page root carries at most one of two mutually exclusive flags,
//! `"light"` and `"dark"`, which the styling layer keys its color scheme
//! off. The store only ever clears both flags and then applies one.

mod error;
mod root_flags;
#[cfg(target_arch = "wasm32")]
mod web;

pub use error::TargetError;
pub use root_flags::RootFlags;
#[cfg(target_arch = "wasm32")]
pub use web::DocumentRoot;

use crate::theme::Theme;

/// The theme indicator on the page root.
pub trait PresentationTarget {
    /// Removes both theme flags, leaving unrelated flags untouched.
    fn clear_indicators(&mut self) -> Result<(), TargetError>;

    /// Adds the flag for `theme`.
    fn apply_indicator(&mut self, theme: Theme) -> Result<(), TargetError>;
}

impl<T: PresentationTarget + ?Sized> PresentationTarget for Box<T> {
    fn clear_indicators(&mut self) -> Result<(), TargetError> {
        (**self).clear_indicators()
    }

    fn apply_indicator(&mut self, theme: Theme) -> Result<(), TargetError> {
        (**self).apply_indicator(theme)
    }
}
