use aeroforce::{AeroError, BackendRegistry, Vehicle};

use crate::common::FixedCandidate;

/// Builds a registry of fixed candidates named `backend_<i>` from a priority list
pub fn create_registry(priorities: &[i32]) -> BackendRegistry {
    priorities
        .iter()
        .enumerate()
        .fold(BackendRegistry::new(), |registry, (i, &priority)| {
            registry.with_candidate(FixedCandidate::new(&format!("backend_{}", i), priority))
        })
}

/// Runs selection and returns the winning backend's name
pub fn select_name(
    registry: &mut BackendRegistry,
    vehicle: &dyn Vehicle,
) -> Result<String, AeroError> {
    registry
        .select_active_model(vehicle)
        .map(|model| model.name().to_string())
}
