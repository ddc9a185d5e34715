use nalgebra::Vector3;
use tracing::debug;

use crate::config::{StockSettings, STOCK_BACKEND};
use crate::environment::CelestialBody;
use crate::physics::{
    AeroError, AerodynamicModel, BackendCandidate, BackendCapability, ForceDiagnostics,
};
use crate::utils::{dynamic_pressure, STOCK_PRIORITY};
use crate::vehicles::{Vehicle, VehicleState};

const DEGENERATE_LIFT: f64 = 1e-9;

/// The built-in model. Always available, lowest default priority.
pub struct StockCandidate {
    settings: StockSettings,
    capability: BackendCapability<StockSettings>,
}

impl StockCandidate {
    pub fn new(settings: StockSettings) -> Self {
        Self {
            settings,
            capability: BackendCapability::unavailable(),
        }
    }
}

impl Default for StockCandidate {
    fn default() -> Self {
        Self::new(StockSettings::default())
    }
}

impl BackendCandidate for StockCandidate {
    fn name(&self) -> &str {
        STOCK_BACKEND
    }

    fn probe(&mut self) -> Result<i32, AeroError> {
        self.capability = BackendCapability::available(STOCK_PRIORITY, self.settings.clone());
        Ok(self.capability.priority())
    }

    fn instantiate(&self, vehicle: &dyn Vehicle) -> Result<Box<dyn AerodynamicModel>, AeroError> {
        let settings = self
            .capability
            .entry_points()
            .ok_or_else(|| AeroError::probe_failed(STOCK_BACKEND, "instantiated before probing"))?;
        Ok(Box::new(StockModel::new(vehicle, settings.clone())))
    }
}

/// Flat-plate drag and lift from per-part drag and lift areas.
///
/// Drag opposes the air velocity with magnitude `q * sum(Cd*A)`. Lift acts
/// along the up axis made perpendicular to the air velocity, with magnitude
/// `q * sum(CL*A) * sin(a) * cos(a)`. Outside the atmosphere the force is zero.
pub struct StockModel {
    settings: StockSettings,
    state: VehicleState,
    drag_area: f64,
    lift_area: f64,
    diagnostics: ForceDiagnostics,
}

impl StockModel {
    pub fn new(vehicle: &dyn Vehicle, settings: StockSettings) -> Self {
        let mut model = Self {
            settings,
            state: VehicleState::from_vehicle(vehicle),
            drag_area: 0.0,
            lift_area: 0.0,
            diagnostics: ForceDiagnostics::new(),
        };
        model.refresh(vehicle);
        model
    }

    /// Summed `Cd*A` of physically significant parts (m^2).
    pub fn drag_area(&self) -> f64 {
        self.drag_area
    }

    /// Summed `CL*A` of physically significant parts (m^2).
    pub fn lift_area(&self) -> f64 {
        self.lift_area
    }

    fn lift(&self, air_direction: &Vector3<f64>, q: f64) -> Vector3<f64> {
        if !self.settings.lift_enabled || self.lift_area <= 0.0 {
            return Vector3::zeros();
        }

        let frame = self.state.frame();
        let up = frame.up();
        let Some(lift_direction) =
            (up - air_direction * up.dot(air_direction)).try_normalize(DEGENERATE_LIFT)
        else {
            return Vector3::zeros();
        };

        let alpha = (-air_direction.dot(&up)).atan2(air_direction.dot(&frame.forward()));
        lift_direction * (q * self.lift_area * alpha.sin() * alpha.cos())
    }
}

impl AerodynamicModel for StockModel {
    fn name(&self) -> &str {
        STOCK_BACKEND
    }

    fn refresh(&mut self, vehicle: &dyn Vehicle) {
        self.state.refresh(vehicle);

        let significant = vehicle
            .parts()
            .iter()
            .filter(|part| part.is_physically_significant());
        let (drag_area, lift_area) = significant.fold((0.0, 0.0), |(drag, lift), part| {
            (
                drag + part.effective_drag_area(),
                lift + part.effective_lift_area(),
            )
        });
        self.drag_area = drag_area;
        self.lift_area = lift_area;
    }

    fn vehicle_state(&self) -> &VehicleState {
        &self.state
    }

    fn diagnostics(&self) -> &ForceDiagnostics {
        &self.diagnostics
    }

    fn native_forces(
        &self,
        body: &dyn CelestialBody,
        air_velocity: &Vector3<f64>,
        altitude: f64,
    ) -> Vector3<f64> {
        if !body.has_atmosphere() || altitude >= body.atmosphere_depth() {
            return Vector3::zeros();
        }

        let air_speed = air_velocity.norm();
        // Also rejects a NaN speed
        if !(air_speed >= self.settings.min_air_speed && air_speed > 0.0) {
            debug!(air_speed, "stock model: air speed below threshold");
            return Vector3::zeros();
        }

        let q = dynamic_pressure(body.density(altitude), air_speed);
        let air_direction = air_velocity / air_speed;
        let drag = -air_direction * (q * self.drag_area);

        drag + self.lift(&air_direction, q)
    }

    fn air_density(&self, body: &dyn CelestialBody, altitude: f64) -> Option<f64> {
        Some(body.density(altitude))
    }
}
