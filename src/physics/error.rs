use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AeroError {
    #[error("Backend '{backend}' probe failed: {reason}")]
    BackendProbeFailed { backend: String, reason: String },

    #[error("Backend '{backend}' is incompatible: {reason}")]
    BackendIncompatible { backend: String, reason: String },

    #[error("Backends '{first}' and '{second}' share the highest priority {priority}")]
    AmbiguousPriority {
        first: String,
        second: String,
        priority: i32,
    },

    #[error("No usable aerodynamics backend among {probed} candidates")]
    NoUsableBackend { probed: usize },

    #[error("Backend '{backend}' returned non-finite force [{x}, {y}, {z}]")]
    NonFiniteForce {
        backend: String,
        x: f64,
        y: f64,
        z: f64,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AeroError {
    pub fn probe_failed(backend: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BackendProbeFailed {
            backend: backend.into(),
            reason: reason.into(),
        }
    }

    pub fn incompatible(backend: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BackendIncompatible {
            backend: backend.into(),
            reason: reason.into(),
        }
    }
}
