//! View error types

use eslm_engine::EngineError;
use eslm_shared_state::StateError;
use thiserror::Error;

/// View errors
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Result type for view operations
pub type ViewResult<T> = Result<T, ViewError>;
