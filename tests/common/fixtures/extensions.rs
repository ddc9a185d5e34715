use aeroforce::physics::{AbiVector, ExtensionApi, ExtensionHost};
use aeroforce::{AeroError, BodyHandle, VesselHandle};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Magnitude of the force written by [`lift_along_up`]
pub const FIXED_LIFT: f64 = 1500.0;

/// Fixed world-space force written by [`constant_force`]
pub const CONSTANT_FORCE: AbiVector = AbiVector {
    x: 120.0,
    y: -45.5,
    z: 310.25,
};

/// Writes `up * FIXED_LIFT` for a vessel with identity attitude (up is world -z)
pub extern "C" fn lift_along_up(
    _vessel: VesselHandle,
    force: *mut AbiVector,
    torque: *mut AbiVector,
    _air_velocity: AbiVector,
    _altitude: f64,
) {
    unsafe {
        *force = AbiVector {
            x: 0.0,
            y: 0.0,
            z: -FIXED_LIFT,
        };
        *torque = AbiVector {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        };
    }
}

pub extern "C" fn nan_force(
    _vessel: VesselHandle,
    force: *mut AbiVector,
    _torque: *mut AbiVector,
    _air_velocity: AbiVector,
    _altitude: f64,
) {
    unsafe {
        *force = AbiVector {
            x: f64::NAN,
            y: 0.0,
            z: 0.0,
        };
    }
}

pub extern "C" fn infinite_force(
    _vessel: VesselHandle,
    force: *mut AbiVector,
    _torque: *mut AbiVector,
    _air_velocity: AbiVector,
    _altitude: f64,
) {
    unsafe {
        *force = AbiVector {
            x: 0.0,
            y: f64::INFINITY,
            z: 0.0,
        };
    }
}

pub extern "C" fn constant_force(
    _vessel: VesselHandle,
    force: *mut AbiVector,
    _torque: *mut AbiVector,
    _air_velocity: AbiVector,
    _altitude: f64,
) {
    unsafe {
        *force = CONSTANT_FORCE;
    }
}

pub extern "C" fn sea_level_density(_body: BodyHandle, altitude: f64) -> f64 {
    if altitude < 1.0 {
        1.225
    } else {
        0.5
    }
}

/// Host whose loaded extensions can change between selections
#[derive(Default)]
pub struct TestHost {
    tables: RefCell<HashMap<String, ExtensionApi>>,
    broken: RefCell<HashSet<String>>,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extension(self, name: &str, api: ExtensionApi) -> Self {
        self.load(name, api);
        self
    }

    pub fn load(&self, name: &str, api: ExtensionApi) {
        self.tables.borrow_mut().insert(name.to_string(), api);
    }

    pub fn unload(&self, name: &str) {
        self.tables.borrow_mut().remove(name);
    }

    /// Make symbol lookup for `name` fail outright
    pub fn break_lookup(&self, name: &str) {
        self.broken.borrow_mut().insert(name.to_string());
    }
}

impl ExtensionHost for TestHost {
    fn resolve(&self, extension: &str) -> Result<Option<ExtensionApi>, AeroError> {
        if self.broken.borrow().contains(extension) {
            return Err(AeroError::probe_failed(extension, "symbol lookup failed"));
        }
        Ok(self.tables.borrow().get(extension).copied())
    }
}
