//! Error types for the simulation harness.

use hypocrisy_core::ParamError;
use hypocrisy_env::EnvError;
use thiserror::Error;

/// Errors that end a simulator invocation.
#[derive(Debug, Error)]
pub enum SimError {
    /// Parameters rejected before any run
    #[error(transparent)]
    Param(#[from] ParamError),

    /// Seed could not be derived
    #[error(transparent)]
    Env(#[from] EnvError),

    /// Trajectory file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON summary could not be rendered
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
