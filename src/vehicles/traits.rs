use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};

use super::part::Part;

/// Opaque identifier the host uses for a vehicle across the extension boundary.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VesselHandle(pub u64);

/// The host's view of a simulated vehicle.
pub trait Vehicle {
    fn handle(&self) -> VesselHandle;
    fn parts(&self) -> &[Part];
    /// Body-to-world rotation. Body axes are x forward, y right, z down.
    fn attitude(&self) -> UnitQuaternion<f64>;
}
