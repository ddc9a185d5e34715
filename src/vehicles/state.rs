use serde::{Deserialize, Serialize};

use super::traits::Vehicle;
use crate::physics::ReferenceFrame;

/// Mass and orientation snapshot of one vehicle.
///
/// Only [`VehicleState::refresh`] mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    mass: f64,
    frame: ReferenceFrame,
    significant_parts: usize,
}

impl VehicleState {
    pub fn from_vehicle(vehicle: &dyn Vehicle) -> Self {
        let mut state = Self {
            mass: 0.0,
            frame: ReferenceFrame::default(),
            significant_parts: 0,
        };
        state.refresh(vehicle);
        state
    }

    pub fn refresh(&mut self, vehicle: &dyn Vehicle) {
        let significant = vehicle
            .parts()
            .iter()
            .filter(|part| part.is_physically_significant());

        let (mass, count) = significant.fold((0.0, 0), |(mass, count), part| {
            (mass + part.total_mass(), count + 1)
        });

        self.mass = mass;
        self.significant_parts = count;
        self.frame = ReferenceFrame::from_attitude(&vehicle.attitude());
    }

    /// Total mass of physically significant parts (kg).
    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn frame(&self) -> &ReferenceFrame {
        &self.frame
    }

    pub fn significant_parts(&self) -> usize {
        self.significant_parts
    }
}
