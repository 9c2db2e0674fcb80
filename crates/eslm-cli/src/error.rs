//! CLI error types

use eslm_client::ClientError;
use eslm_shared_state::StateError;
use eslm_views::ViewError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Backend request failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Application state error
    #[error(transparent)]
    State(#[from] StateError),

    /// View error
    #[error(transparent)]
    View(#[from] ViewError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
