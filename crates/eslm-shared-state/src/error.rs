//! State container error types

use thiserror::Error;

/// State container errors
#[derive(Debug, Error)]
pub enum StateError {
    /// State was accessed through a context with no live provider.
    ///
    /// This is a wiring mistake in the caller, not a recoverable runtime condition.
    #[error("useApp must be used within an AppProvider")]
    OutsideProvider,

    /// Loading records from a remote source failed
    #[error("Failed to load state: {0}")]
    Source(String),
}

/// Result type for state operations
pub type StateResult<T> = std::result::Result<T, StateError>;
