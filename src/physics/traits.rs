use nalgebra::Vector3;

use super::diagnostics::ForceDiagnostics;
use super::error::AeroError;
use crate::environment::CelestialBody;
use crate::vehicles::{Vehicle, VehicleState};

/// Flight conditions for a single force query.
#[derive(Clone, Copy)]
pub struct ForceQuery<'a> {
    pub body: &'a dyn CelestialBody,
    /// Altitude above the body's reference surface (m).
    pub altitude: f64,
    /// Magnitude of the air-relative velocity (m/s).
    pub air_speed: f64,
    /// Angle of attack (rad).
    pub angle_of_attack: f64,
}

/// One backend's adapter onto the shared force contract.
///
/// Implementors supply the raw world-space computation; the air-velocity
/// construction, NaN policy and projection into `(right, up, backward)` live
/// in [`AerodynamicModel::compute_forces`] so they are identical for every
/// backend.
pub trait AerodynamicModel {
    /// Stable identifier for diagnostics.
    fn name(&self) -> &str;

    /// Recompute the cached vehicle state. Safe to call every step.
    fn refresh(&mut self, vehicle: &dyn Vehicle);

    fn vehicle_state(&self) -> &VehicleState;

    fn diagnostics(&self) -> &ForceDiagnostics;

    /// Raw backend output: world-space force for a world-space air velocity.
    fn native_forces(
        &self,
        body: &dyn CelestialBody,
        air_velocity: &Vector3<f64>,
        altitude: f64,
    ) -> Vector3<f64>;

    /// Air density as the backend sees it, if the backend exposes it.
    fn air_density(&self, body: &dyn CelestialBody, altitude: f64) -> Option<f64>;

    /// Force in vehicle-local `(right, up, backward)` coordinates. Always finite.
    fn compute_forces(
        &self,
        body: &dyn CelestialBody,
        altitude: f64,
        air_speed: f64,
        angle_of_attack: f64,
    ) -> Vector3<f64> {
        let frame = self.vehicle_state().frame();
        let air_velocity = frame.air_velocity(air_speed, angle_of_attack);

        let raw = self.native_forces(body, &air_velocity, altitude);
        let world = self.diagnostics().finite_or_zero(self.name(), raw);

        // A finite force can still overflow once projected
        self.diagnostics()
            .finite_or_zero(self.name(), frame.to_local(&world))
    }

    fn compute(&self, query: &ForceQuery<'_>) -> Vector3<f64> {
        self.compute_forces(
            query.body,
            query.altitude,
            query.air_speed,
            query.angle_of_attack,
        )
    }
}

/// A backend the registry can probe and, if it wins, instantiate.
pub trait BackendCandidate {
    fn name(&self) -> &str;

    /// Resolve entry points and report a priority.
    ///
    /// An absent backend is not an error: it reports
    /// [`UNAVAILABLE_PRIORITY`](crate::utils::UNAVAILABLE_PRIORITY).
    fn probe(&mut self) -> Result<i32, AeroError>;

    /// Build the adapter from the entry points resolved by the last probe.
    fn instantiate(&self, vehicle: &dyn Vehicle) -> Result<Box<dyn AerodynamicModel>, AeroError>;
}
