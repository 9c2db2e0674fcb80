//! Engine error types

use thiserror::Error;

/// Engine errors
#[derive(Debug, Error)]
pub enum EngineError {
    /// Blank prompts are never submitted
    #[error("prompt cannot be empty")]
    EmptyPrompt,

    /// Single-flight policy refused a concurrent submission
    #[error("a generation is already in progress")]
    Busy,

    /// The generation was cancelled before it completed
    #[error("generation cancelled")]
    Cancelled,

    /// The generation task failed
    #[error("generation task failed: {0}")]
    Task(String),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
