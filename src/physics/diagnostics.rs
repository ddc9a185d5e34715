use nalgebra::Vector3;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

use super::error::AeroError;
use crate::utils::is_finite_vector;

/// Counters a model keeps about recovered faults. They never influence results.
#[derive(Debug, Default)]
pub struct ForceDiagnostics {
    non_finite_forces: AtomicU64,
}

impl ForceDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of results replaced by the zero vector so far.
    pub fn non_finite_forces(&self) -> u64 {
        self.non_finite_forces.load(Ordering::Relaxed)
    }

    /// Passes finite forces through and swaps anything else for zero, with a warning.
    pub fn finite_or_zero(&self, backend: &str, force: Vector3<f64>) -> Vector3<f64> {
        if is_finite_vector(&force) {
            return force;
        }

        self.non_finite_forces.fetch_add(1, Ordering::Relaxed);
        let fault = AeroError::NonFiniteForce {
            backend: backend.to_string(),
            x: force.x,
            y: force.y,
            z: force.z,
        };
        warn!("{}; substituting zero force", fault);
        Vector3::zeros()
    }
}
