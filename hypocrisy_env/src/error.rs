//! Error types for the environment abstraction.

use thiserror::Error;

/// Errors that can occur while setting up a source of randomness.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The system clock reports a time before the UNIX epoch
    #[error("System clock error: {0}")]
    ClockError(String),

    /// A scripted source was given nothing to replay
    #[error("Scripted source needs at least one draw")]
    EmptyScript,

    /// A scripted draw lies outside `[0, 1)`
    #[error("Scripted draw {value} at position {index} is outside [0, 1)")]
    DrawOutOfRange { index: usize, value: f64 },
}

impl EnvError {
    /// Creates a clock error.
    pub fn clock(msg: impl Into<String>) -> Self {
        Self::ClockError(msg.into())
    }
}
