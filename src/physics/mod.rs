pub mod capability;
pub mod diagnostics;
pub mod error;
pub mod frame;
pub mod models;
pub mod registry;
pub mod session;
pub mod traits;

pub use capability::BackendCapability;
pub use diagnostics::ForceDiagnostics;
pub use error::AeroError;
pub use frame::ReferenceFrame;
pub use models::{
    AbiVector, CalculateForcesFn, DensityFn, ExtendedCandidate, ExtendedModel, ExtensionApi,
    ExtensionHost, StockCandidate, StockModel, EXTENSION_ABI_VERSION,
};
pub use registry::{resolve_winner, BackendRegistry, ProbeReport, ProbeStatus};
pub use session::AeroSession;
pub use traits::{AerodynamicModel, BackendCandidate, ForceQuery};
