use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{load_yaml, ConfigError};
use crate::utils::lerp;

/// Opaque identifier the host uses for a celestial body across the extension boundary.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyHandle(pub u64);

/// The body a vehicle is flying through. Density comes from the host's
/// atmosphere model; this crate only reads it.
pub trait CelestialBody {
    fn name(&self) -> &str;
    fn handle(&self) -> BodyHandle;
    fn has_atmosphere(&self) -> bool;
    /// Altitude of the top of the atmosphere (m).
    fn atmosphere_depth(&self) -> f64;
    /// Air density at altitude (kg/m^3).
    fn density(&self, altitude: f64) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensitySample {
    pub altitude: f64,
    pub density: f64,
}

/// A body whose atmosphere is a host-supplied density table.
///
/// Density is linearly interpolated between samples, held at the first
/// sample below it and zero at or above `atmosphere_depth`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabulatedBody {
    pub name: String,
    pub id: u64,
    pub atmosphere_depth: f64,
    #[serde(default)]
    pub density_samples: Vec<DensitySample>,
}

impl TabulatedBody {
    pub fn new(name: impl Into<String>, id: u64, atmosphere_depth: f64) -> Self {
        Self {
            name: name.into(),
            id,
            atmosphere_depth,
            density_samples: Vec::new(),
        }
    }

    /// A body with no atmosphere at all.
    pub fn airless(name: impl Into<String>, id: u64) -> Self {
        Self::new(name, id, 0.0)
    }

    pub fn with_sample(mut self, altitude: f64, density: f64) -> Self {
        self.density_samples.push(DensitySample { altitude, density });
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.atmosphere_depth.is_finite() || self.atmosphere_depth < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "body '{}' has invalid atmosphere depth {}",
                self.name, self.atmosphere_depth
            )));
        }
        for pair in self.density_samples.windows(2) {
            if pair[1].altitude <= pair[0].altitude {
                return Err(ConfigError::ValidationError(format!(
                    "body '{}' density samples must have strictly increasing altitude",
                    self.name
                )));
            }
        }
        if self
            .density_samples
            .iter()
            .any(|s| !s.density.is_finite() || s.density < 0.0)
        {
            return Err(ConfigError::ValidationError(format!(
                "body '{}' has a negative or non-finite density sample",
                self.name
            )));
        }
        Ok(())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let body: TabulatedBody = load_yaml(path)?;
        body.validate()?;
        Ok(body)
    }
}

impl CelestialBody for TabulatedBody {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self) -> BodyHandle {
        BodyHandle(self.id)
    }

    fn has_atmosphere(&self) -> bool {
        self.atmosphere_depth > 0.0 && !self.density_samples.is_empty()
    }

    fn atmosphere_depth(&self) -> f64 {
        self.atmosphere_depth
    }

    fn density(&self, altitude: f64) -> f64 {
        if !self.has_atmosphere() || altitude >= self.atmosphere_depth {
            return 0.0;
        }

        let samples = &self.density_samples;
        let upper = samples.partition_point(|s| s.altitude <= altitude);
        match upper {
            0 => samples[0].density,
            n if n == samples.len() => samples[n - 1].density,
            n => {
                let (lo, hi) = (samples[n - 1], samples[n]);
                let factor = (altitude - lo.altitude) / (hi.altitude - lo.altitude);
                lerp(lo.density, hi.density, factor)
            }
        }
    }
}
