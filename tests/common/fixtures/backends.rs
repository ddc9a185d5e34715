use aeroforce::physics::ForceDiagnostics;
use aeroforce::{
    AeroError, AerodynamicModel, BackendCandidate, CelestialBody, Vehicle, VehicleState,
};
use nalgebra::Vector3;

#[derive(Debug, Clone, Copy)]
pub enum ProbeBehaviour {
    Priority(i32),
    Fail,
    Panic,
}

/// A candidate whose probe outcome and world-space force are fixed up front
pub struct FixedCandidate {
    pub name: String,
    pub behaviour: ProbeBehaviour,
    pub world_force: Vector3<f64>,
}

impl FixedCandidate {
    pub fn new(name: &str, priority: i32) -> Self {
        Self {
            name: name.to_string(),
            behaviour: ProbeBehaviour::Priority(priority),
            world_force: Vector3::zeros(),
        }
    }

    pub fn failing(name: &str) -> Self {
        Self {
            behaviour: ProbeBehaviour::Fail,
            ..Self::new(name, 0)
        }
    }

    pub fn panicking(name: &str) -> Self {
        Self {
            behaviour: ProbeBehaviour::Panic,
            ..Self::new(name, 0)
        }
    }

    pub fn with_force(mut self, world_force: Vector3<f64>) -> Self {
        self.world_force = world_force;
        self
    }
}

impl BackendCandidate for FixedCandidate {
    fn name(&self) -> &str {
        &self.name
    }

    fn probe(&mut self) -> Result<i32, AeroError> {
        match self.behaviour {
            ProbeBehaviour::Priority(priority) => Ok(priority),
            ProbeBehaviour::Fail => Err(AeroError::probe_failed(&self.name, "lookup failed")),
            ProbeBehaviour::Panic => panic!("probe of {} blew up", self.name),
        }
    }

    fn instantiate(&self, vehicle: &dyn Vehicle) -> Result<Box<dyn AerodynamicModel>, AeroError> {
        Ok(Box::new(FixedModel {
            name: self.name.clone(),
            world_force: self.world_force,
            state: VehicleState::from_vehicle(vehicle),
            diagnostics: ForceDiagnostics::new(),
        }))
    }
}

/// Model that always reports the same world-space force
pub struct FixedModel {
    pub name: String,
    pub world_force: Vector3<f64>,
    pub state: VehicleState,
    pub diagnostics: ForceDiagnostics,
}

impl AerodynamicModel for FixedModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn refresh(&mut self, vehicle: &dyn Vehicle) {
        self.state.refresh(vehicle);
    }

    fn vehicle_state(&self) -> &VehicleState {
        &self.state
    }

    fn diagnostics(&self) -> &ForceDiagnostics {
        &self.diagnostics
    }

    fn native_forces(
        &self,
        _body: &dyn CelestialBody,
        _air_velocity: &Vector3<f64>,
        _altitude: f64,
    ) -> Vector3<f64> {
        self.world_force
    }

    fn air_density(&self, _body: &dyn CelestialBody, _altitude: f64) -> Option<f64> {
        None
    }
}
