mod aerodynamics;
mod loader;

pub use aerodynamics::{
    AeroConfig, AeroConfigBuilder, BackendSettings, StockSettings, DEFAULT_EXTENSION,
    STOCK_BACKEND,
};
pub use loader::{load_yaml, ConfigError};
