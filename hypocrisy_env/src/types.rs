//! Common types for the environment abstraction.

use crate::error::EnvError;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Master seed of one program run.
///
/// A requested seed of `0` (or none at all) means "derive from the wall
/// clock", so the seed actually used is always non-zero and printable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(u64);

impl Seed {
    /// Creates a seed from an explicit value.
    pub fn from_value(value: u64) -> Self {
        Self(value)
    }

    /// Creates a seed from the current wall-clock time in whole seconds.
    pub fn from_clock() -> Result<Self, EnvError> {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| EnvError::clock(e.to_string()))?
            .as_secs();
        Ok(Self(secs))
    }

    /// Resolves an optional user-supplied seed.
    pub fn resolve(requested: Option<u64>) -> Result<Self, EnvError> {
        match requested {
            Some(value) if value != 0 => Ok(Self::from_value(value)),
            _ => Self::from_clock(),
        }
    }

    /// Returns the raw seed value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
