use thiserror::Error;

/// Error returned by [`ThemeHandle`](super::ThemeHandle) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The handle was not obtained from a live [`ThemeProvider`](super::ThemeProvider).
    #[error("theme accessed outside an initialized ThemeProvider")]
    NotInitialized,
}
