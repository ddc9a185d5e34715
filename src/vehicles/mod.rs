mod part;
mod state;
mod traits;
mod vessel;

pub use part::{Part, PhysicalSignificance};
pub use state::VehicleState;
pub use traits::{Vehicle, VesselHandle};
pub use vessel::Vessel;
