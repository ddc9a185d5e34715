use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::part::Part;
use super::traits::{Vehicle, VesselHandle};
use crate::config::{load_yaml, ConfigError};

/// A plain-data vehicle, for hosts that keep their own part list and for loading from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    pub name: String,
    pub id: u64,
    #[serde(default = "default_attitude")]
    pub attitude: UnitQuaternion<f64>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

fn default_attitude() -> UnitQuaternion<f64> {
    UnitQuaternion::identity()
}

impl Vessel {
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        Self {
            name: name.into(),
            id,
            attitude: UnitQuaternion::identity(),
            parts: Vec::new(),
        }
    }

    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    pub fn with_attitude(mut self, attitude: UnitQuaternion<f64>) -> Self {
        self.attitude = attitude;
        self
    }

    pub fn set_attitude(&mut self, attitude: UnitQuaternion<f64>) {
        self.attitude = attitude;
    }

    pub fn parts_mut(&mut self) -> &mut Vec<Part> {
        &mut self.parts
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_yaml(path)
    }
}

impl Vehicle for Vessel {
    fn handle(&self) -> VesselHandle {
        VesselHandle(self.id)
    }

    fn parts(&self) -> &[Part] {
        &self.parts
    }

    fn attitude(&self) -> UnitQuaternion<f64> {
        self.attitude
    }
}
