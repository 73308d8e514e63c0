use thiserror::Error;

/// Error from updating a presentation target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    /// There is no document root to update.
    #[error("presentation target is unavailable")]
    Unavailable,

    /// The DOM rejected the class-list change.
    #[error("failed to update document root: {0}")]
    Dom(String),
}
