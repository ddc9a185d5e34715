//! Backend-agnostic aerodynamic force queries.
//!
//! A [`BackendRegistry`] probes every known aerodynamics backend once and
//! picks exactly one by priority. The resulting [`AeroSession`] routes every
//! force query through that backend and returns forces in the vehicle-local
//! `(right, up, backward)` frame, whatever backend produced them.

pub mod config;
pub mod environment;
pub mod physics;
pub mod utils;
pub mod vehicles;

pub use config::{AeroConfig, ConfigError};
pub use environment::{BodyHandle, CelestialBody, TabulatedBody};
pub use physics::{
    AeroError, AeroSession, AerodynamicModel, BackendCandidate, BackendCapability,
    BackendRegistry, ExtensionApi, ExtensionHost, ForceQuery, ReferenceFrame,
};
pub use vehicles::{Part, Vehicle, VehicleState, Vessel, VesselHandle};
