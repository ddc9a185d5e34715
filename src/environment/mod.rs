mod body;

pub use body::{BodyHandle, CelestialBody, DensitySample, TabulatedBody};
