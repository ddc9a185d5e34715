use nalgebra::Vector3;
use std::mem;
use std::sync::Arc;
use tracing::debug;

use crate::environment::{BodyHandle, CelestialBody};
use crate::physics::{
    AeroError, AerodynamicModel, BackendCandidate, BackendCapability, ForceDiagnostics,
};
use crate::utils::{EXTENSION_PRIORITY, UNAVAILABLE_PRIORITY};
use crate::vehicles::{Vehicle, VehicleState, VesselHandle};

/// Version of [`ExtensionApi`] this crate was built against.
pub const EXTENSION_ABI_VERSION: u32 = 1;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AbiVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Vector3<f64>> for AbiVector {
    fn from(v: Vector3<f64>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<AbiVector> for Vector3<f64> {
    fn from(v: AbiVector) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

/// Writes world-space force and torque for a vessel moving at `air_velocity` through the air.
pub type CalculateForcesFn = extern "C" fn(
    vessel: VesselHandle,
    force: *mut AbiVector,
    torque: *mut AbiVector,
    air_velocity: AbiVector,
    altitude: f64,
);

/// Air density (kg/m^3) at an altitude above a body.
pub type DensityFn = extern "C" fn(body: BodyHandle, altitude: f64) -> f64;

/// Function table an aerodynamics extension exports to the host.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ExtensionApi {
    /// `size_of::<ExtensionApi>()` as the extension was compiled.
    pub struct_size: usize,
    pub abi_version: u32,
    pub priority: i32,
    pub calculate_forces: Option<CalculateForcesFn>,
    pub density_at: Option<DensityFn>,
}

impl ExtensionApi {
    pub fn new(calculate_forces: CalculateForcesFn) -> Self {
        Self {
            struct_size: mem::size_of::<Self>(),
            abi_version: EXTENSION_ABI_VERSION,
            priority: EXTENSION_PRIORITY,
            calculate_forces: Some(calculate_forces),
            density_at: None,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_density(mut self, density_at: DensityFn) -> Self {
        self.density_at = Some(density_at);
        self
    }

    /// Rejects tables whose shape differs from the one this crate calls.
    fn check(&self, extension: &str) -> Result<CalculateForcesFn, AeroError> {
        if self.struct_size != mem::size_of::<Self>() {
            return Err(AeroError::incompatible(
                extension,
                format!(
                    "function table is {} bytes, expected {}",
                    self.struct_size,
                    mem::size_of::<Self>()
                ),
            ));
        }
        if self.abi_version != EXTENSION_ABI_VERSION {
            return Err(AeroError::incompatible(
                extension,
                format!(
                    "ABI version {}, expected {}",
                    self.abi_version, EXTENSION_ABI_VERSION
                ),
            ));
        }
        self.calculate_forces
            .ok_or_else(|| AeroError::incompatible(extension, "no force entry point exported"))
    }
}

/// The host's side of extension loading.
pub trait ExtensionHost {
    /// Function table of a loaded extension, or `None` when it is not loaded.
    fn resolve(&self, extension: &str) -> Result<Option<ExtensionApi>, AeroError>;
}

#[derive(Debug, Clone, Copy)]
struct ResolvedApi {
    calculate_forces: CalculateForcesFn,
    density_at: Option<DensityFn>,
}

/// A third-party aerodynamics extension reached through the host.
pub struct ExtendedCandidate {
    name: String,
    host: Arc<dyn ExtensionHost>,
    capability: BackendCapability<ResolvedApi>,
}

impl ExtendedCandidate {
    pub fn new(name: impl Into<String>, host: Arc<dyn ExtensionHost>) -> Self {
        Self {
            name: name.into(),
            host,
            capability: BackendCapability::unavailable(),
        }
    }
}

impl BackendCandidate for ExtendedCandidate {
    fn name(&self) -> &str {
        &self.name
    }

    fn probe(&mut self) -> Result<i32, AeroError> {
        self.capability = BackendCapability::unavailable();

        let Some(api) = self.host.resolve(&self.name)? else {
            debug!(extension = %self.name, "extension not loaded");
            return Ok(UNAVAILABLE_PRIORITY);
        };

        let calculate_forces = api.check(&self.name)?;
        self.capability = BackendCapability::available(
            api.priority,
            ResolvedApi {
                calculate_forces,
                density_at: api.density_at,
            },
        );
        Ok(self.capability.priority())
    }

    fn instantiate(&self, vehicle: &dyn Vehicle) -> Result<Box<dyn AerodynamicModel>, AeroError> {
        let api = self
            .capability
            .entry_points()
            .ok_or_else(|| AeroError::probe_failed(&self.name, "instantiated before probing"))?;
        Ok(Box::new(ExtendedModel::new(
            self.name.clone(),
            vehicle,
            api.calculate_forces,
            api.density_at,
        )))
    }
}

/// Adapter that forwards queries to an extension's force entry point.
pub struct ExtendedModel {
    name: String,
    calculate_forces: CalculateForcesFn,
    density_at: Option<DensityFn>,
    vessel: VesselHandle,
    state: VehicleState,
    diagnostics: ForceDiagnostics,
}

impl ExtendedModel {
    pub fn new(
        name: impl Into<String>,
        vehicle: &dyn Vehicle,
        calculate_forces: CalculateForcesFn,
        density_at: Option<DensityFn>,
    ) -> Self {
        Self {
            name: name.into(),
            calculate_forces,
            density_at,
            vessel: vehicle.handle(),
            state: VehicleState::from_vehicle(vehicle),
            diagnostics: ForceDiagnostics::new(),
        }
    }
}

impl AerodynamicModel for ExtendedModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn refresh(&mut self, vehicle: &dyn Vehicle) {
        self.vessel = vehicle.handle();
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
        air_velocity: &Vector3<f64>,
        altitude: f64,
    ) -> Vector3<f64> {
        let mut force = AbiVector::default();
        // Torque is part of the entry point's shape but unused here
        let mut torque = AbiVector::default();
        (self.calculate_forces)(
            self.vessel,
            &mut force,
            &mut torque,
            AbiVector::from(*air_velocity),
            altitude,
        );
        force.into()
    }

    fn air_density(&self, body: &dyn CelestialBody, altitude: f64) -> Option<f64> {
        self.density_at
            .map(|density_at| density_at(body.handle(), altitude))
    }
}
