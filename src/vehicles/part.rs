use serde::{Deserialize, Serialize};

/// Whether a part takes part in the physics of the vehicle it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PhysicalSignificance {
    #[default]
    Full,
    None,
}

/// A single part of a vehicle as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub name: String,
    /// Dry mass of the part (kg).
    #[serde(default)]
    pub mass: f64,
    /// Mass of the resources the part contains (kg).
    #[serde(default)]
    pub resource_mass: f64,
    #[serde(default)]
    pub significance: PhysicalSignificance,
    /// Drag coefficient times reference area (m^2).
    #[serde(default)]
    pub drag_area: f64,
    /// Lift coefficient slope times reference area (m^2).
    #[serde(default)]
    pub lift_area: f64,
}

impl Part {
    pub fn new(name: impl Into<String>, mass: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            resource_mass: 0.0,
            significance: PhysicalSignificance::Full,
            drag_area: 0.0,
            lift_area: 0.0,
        }
    }

    /// A part the physics ignores, such as a ladder or an antenna.
    pub fn insignificant(name: impl Into<String>, mass: f64) -> Self {
        Self {
            significance: PhysicalSignificance::None,
            ..Self::new(name, mass)
        }
    }

    pub fn with_resources(mut self, resource_mass: f64) -> Self {
        self.resource_mass = resource_mass;
        self
    }

    pub fn with_drag_area(mut self, drag_area: f64) -> Self {
        self.drag_area = drag_area;
        self
    }

    pub fn with_lift_area(mut self, lift_area: f64) -> Self {
        self.lift_area = lift_area;
        self
    }

    pub fn is_physically_significant(&self) -> bool {
        self.significance == PhysicalSignificance::Full
    }

    /// Own mass plus contained resources. Missing or garbage values count as zero.
    pub fn total_mass(&self) -> f64 {
        non_negative(self.mass) + non_negative(self.resource_mass)
    }

    pub fn effective_drag_area(&self) -> f64 {
        non_negative(self.drag_area)
    }

    pub fn effective_lift_area(&self) -> f64 {
        non_negative(self.lift_area)
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
