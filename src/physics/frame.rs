use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

const DEGENERATE_AXIS: f64 = 1e-12;

/// Orthonormal vehicle basis expressed in world coordinates.
///
/// `forward x up = right`. Local coordinates are `(right, up, backward)`
/// with `backward = -forward`; every backend reports forces in this order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceFrame {
    forward: Vector3<f64>,
    up: Vector3<f64>,
    right: Vector3<f64>,
}

impl Default for ReferenceFrame {
    fn default() -> Self {
        Self::from_attitude(&UnitQuaternion::identity())
    }
}

impl ReferenceFrame {
    /// Basis from a body-to-world rotation with body axes x forward, y right, z down.
    pub fn from_attitude(attitude: &UnitQuaternion<f64>) -> Self {
        Self {
            forward: attitude * Vector3::x(),
            up: attitude * -Vector3::z(),
            right: attitude * Vector3::y(),
        }
    }

    /// Completes a basis from a nose direction and an approximate up direction.
    ///
    /// Returns `None` when either vector is zero or they are parallel.
    pub fn from_axes(forward: Vector3<f64>, up: Vector3<f64>) -> Option<Self> {
        let forward = forward.try_normalize(DEGENERATE_AXIS)?;
        let up = (up - forward * up.dot(&forward)).try_normalize(DEGENERATE_AXIS)?;
        let right = forward.cross(&up);
        Some(Self { forward, up, right })
    }

    pub fn forward(&self) -> Vector3<f64> {
        self.forward
    }

    pub fn up(&self) -> Vector3<f64> {
        self.up
    }

    pub fn right(&self) -> Vector3<f64> {
        self.right
    }

    pub fn backward(&self) -> Vector3<f64> {
        -self.forward
    }

    /// World-space air velocity for a speed and angle of attack.
    ///
    /// The forward axis is rotated towards up by `-angle_of_attack`, so a
    /// positive angle of attack puts the air velocity below the nose.
    pub fn air_velocity(&self, air_speed: f64, angle_of_attack: f64) -> Vector3<f64> {
        let angle = -angle_of_attack;
        (self.forward * angle.cos() + self.up * angle.sin()) * air_speed
    }

    /// Projects a world-space vector onto `(right, up, backward)`.
    pub fn to_local(&self, world: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            world.dot(&self.right),
            world.dot(&self.up),
            world.dot(&self.backward()),
        )
    }

    /// Inverse of [`ReferenceFrame::to_local`].
    pub fn to_world(&self, local: &Vector3<f64>) -> Vector3<f64> {
        self.right * local.x + self.up * local.y + self.backward() * local.z
    }
}
