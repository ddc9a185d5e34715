use nalgebra::Vector3;
use tracing::{info, warn};

use super::error::AeroError;
use super::registry::BackendRegistry;
use super::traits::{AerodynamicModel, ForceQuery};
use crate::environment::CelestialBody;
use crate::vehicles::{Vehicle, VehicleState};

/// Owns the one active aerodynamic model for a simulation session.
///
/// A session can only be built by a successful selection, so force queries
/// can never run before a backend is chosen. Re-selection needs `&mut self`
/// and therefore cannot overlap outstanding queries.
pub struct AeroSession {
    model: Box<dyn AerodynamicModel>,
}

impl AeroSession {
    pub fn initialize(
        registry: &mut BackendRegistry,
        vehicle: &dyn Vehicle,
    ) -> Result<Self, AeroError> {
        let model = registry.select_active_model(vehicle)?;
        Ok(Self { model })
    }

    /// Re-runs selection, e.g. after the set of loaded extensions changed.
    ///
    /// On failure the previously active model stays in place.
    pub fn reinitialize(
        &mut self,
        registry: &mut BackendRegistry,
        vehicle: &dyn Vehicle,
    ) -> Result<(), AeroError> {
        match registry.select_active_model(vehicle) {
            Ok(model) => {
                info!(
                    previous = self.model.name(),
                    current = model.name(),
                    "aerodynamics backend re-selected"
                );
                self.model = model;
                Ok(())
            }
            Err(err) => {
                warn!(
                    active = self.model.name(),
                    "re-selection failed, keeping active backend: {}", err
                );
                Err(err)
            }
        }
    }

    pub fn active_backend(&self) -> &str {
        self.model.name()
    }

    pub fn model(&self) -> &dyn AerodynamicModel {
        self.model.as_ref()
    }

    pub fn vehicle_state(&self) -> &VehicleState {
        self.model.vehicle_state()
    }

    pub fn refresh(&mut self, vehicle: &dyn Vehicle) {
        self.model.refresh(vehicle);
    }

    pub fn compute_forces(
        &self,
        body: &dyn CelestialBody,
        altitude: f64,
        air_speed: f64,
        angle_of_attack: f64,
    ) -> Vector3<f64> {
        self.model
            .compute_forces(body, altitude, air_speed, angle_of_attack)
    }

    pub fn compute(&self, query: &ForceQuery<'_>) -> Vector3<f64> {
        self.model.compute(query)
    }

    pub fn air_density(&self, body: &dyn CelestialBody, altitude: f64) -> Option<f64> {
        self.model.air_density(body, altitude)
    }
}
