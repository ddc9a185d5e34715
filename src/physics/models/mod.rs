mod extended;
mod stock;

pub use extended::{
    AbiVector, CalculateForcesFn, DensityFn, ExtendedCandidate, ExtendedModel, ExtensionApi,
    ExtensionHost, EXTENSION_ABI_VERSION,
};
pub use stock::{StockCandidate, StockModel};
