use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::loader::ConfigError;
use crate::utils::MIN_AIR_SPEED;

/// Name under which the built-in model is registered.
pub const STOCK_BACKEND: &str = "stock";

/// Name of the extension probed when the config lists none.
pub const DEFAULT_EXTENSION: &str = "extended";

/// Per-backend overrides applied before selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Disabled backends are reported unavailable without being probed.
    pub enabled: bool,
    /// Replaces the priority the backend reports for itself.
    pub priority: Option<i32>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            priority: None,
        }
    }
}

/// Tuning for the built-in model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockSettings {
    /// Air speeds below this produce no force (m/s).
    pub min_air_speed: f64,
    /// Whether lifting parts contribute lift or only drag.
    pub lift_enabled: bool,
}

impl Default for StockSettings {
    fn default() -> Self {
        Self {
            min_air_speed: MIN_AIR_SPEED,
            lift_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AeroConfig {
    pub stock: StockSettings,
    /// Extensions the host may have loaded, probed in this order.
    pub extensions: Vec<String>,
    /// Overrides keyed by backend name.
    pub backends: BTreeMap<String, BackendSettings>,
}

impl Default for AeroConfig {
    fn default() -> Self {
        Self {
            stock: StockSettings::default(),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            backends: BTreeMap::new(),
        }
    }
}

impl AeroConfig {
    pub fn builder() -> AeroConfigBuilder {
        AeroConfigBuilder::new()
    }

    /// Settings for a backend, falling back to the defaults when none are configured.
    pub fn settings_for(&self, backend: &str) -> BackendSettings {
        self.backends.get(backend).copied().unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.stock.min_air_speed.is_finite() || self.stock.min_air_speed < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "stock.min_air_speed must be a non-negative number, got {}",
                self.stock.min_air_speed
            )));
        }

        for (i, name) in self.extensions.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "extension names must not be empty".to_string(),
                ));
            }
            if name == STOCK_BACKEND {
                return Err(ConfigError::ValidationError(format!(
                    "'{}' is reserved for the built-in model",
                    STOCK_BACKEND
                )));
            }
            if self.extensions[..i].contains(name) {
                return Err(ConfigError::ValidationError(format!(
                    "extension '{}' is listed more than once",
                    name
                )));
            }
        }

        for (name, settings) in &self.backends {
            if let Some(priority) = settings.priority {
                if priority < 0 {
                    return Err(ConfigError::ValidationError(format!(
                        "backend '{}' has negative priority {}; set enabled: false instead",
                        name, priority
                    )));
                }
            }
        }

        Ok(())
    }
}

#[derive(Default, Debug, Clone)]
pub struct AeroConfigBuilder {
    pub min_air_speed: Option<f64>,
    pub lift_enabled: Option<bool>,
    pub extensions: Option<Vec<String>>,
    pub backends: BTreeMap<String, BackendSettings>,
}

impl AeroConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_air_speed(mut self, speed: f64) -> Self {
        self.min_air_speed = Some(speed);
        self
    }

    pub fn lift_enabled(mut self, enabled: bool) -> Self {
        self.lift_enabled = Some(enabled);
        self
    }

    pub fn extension(mut self, name: impl Into<String>) -> Self {
        self.extensions.get_or_insert_with(Vec::new).push(name.into());
        self
    }

    pub fn no_extensions(mut self) -> Self {
        self.extensions = Some(Vec::new());
        self
    }

    pub fn priority(mut self, backend: impl Into<String>, priority: i32) -> Self {
        self.backends.entry(backend.into()).or_default().priority = Some(priority);
        self
    }

    pub fn disable(mut self, backend: impl Into<String>) -> Self {
        self.backends.entry(backend.into()).or_default().enabled = false;
        self
    }

    pub fn build(self) -> Result<AeroConfig, ConfigError> {
        let mut config = AeroConfig::default();

        if let Some(min_air_speed) = self.min_air_speed {
            config.stock.min_air_speed = min_air_speed;
        }
        if let Some(lift_enabled) = self.lift_enabled {
            config.stock.lift_enabled = lift_enabled;
        }
        if let Some(extensions) = self.extensions {
            config.extensions = extensions;
        }
        config.backends = self.backends;

        config.validate()?;
        Ok(config)
    }
}
