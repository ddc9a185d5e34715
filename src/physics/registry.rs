use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::error::AeroError;
use super::models::{ExtendedCandidate, ExtensionHost, StockCandidate};
use super::traits::{AerodynamicModel, BackendCandidate};
use crate::config::{AeroConfig, BackendSettings};
use crate::utils::UNAVAILABLE_PRIORITY;
use crate::vehicles::Vehicle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    Available,
    Unavailable,
    Disabled,
    Failed(String),
}

/// Outcome of probing one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub backend: String,
    pub priority: i32,
    pub status: ProbeStatus,
}

impl ProbeReport {
    pub fn is_available(&self) -> bool {
        self.priority >= 0
    }
}

struct Registered {
    candidate: Box<dyn BackendCandidate>,
    settings: BackendSettings,
}

/// Every backend this session could use, probed once at selection time.
#[derive(Default)]
pub struct BackendRegistry {
    candidates: Vec<Registered>,
    reports: Vec<ProbeReport>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock model plus every extension named in the config, with overrides applied.
    pub fn from_config(config: &AeroConfig, host: Arc<dyn ExtensionHost>) -> Self {
        let mut registry = Self::new();

        let stock = StockCandidate::new(config.stock.clone());
        let stock_settings = config.settings_for(stock.name());
        registry.register_with(Box::new(stock), stock_settings);

        for extension in &config.extensions {
            registry.register_with(
                Box::new(ExtendedCandidate::new(extension.clone(), host.clone())),
                config.settings_for(extension),
            );
        }

        registry
    }

    pub fn with_candidate(mut self, candidate: impl BackendCandidate + 'static) -> Self {
        self.register(Box::new(candidate));
        self
    }

    pub fn register(&mut self, candidate: Box<dyn BackendCandidate>) {
        self.register_with(candidate, BackendSettings::default());
    }

    pub fn register_with(&mut self, candidate: Box<dyn BackendCandidate>, settings: BackendSettings) {
        self.candidates.push(Registered {
            candidate,
            settings,
        });
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.candidates.iter().map(|r| r.candidate.name()).collect()
    }

    /// Reports from the most recent probe pass.
    pub fn reports(&self) -> &[ProbeReport] {
        &self.reports
    }

    /// Probes every candidate. A failing or panicking probe only marks its own
    /// candidate unavailable.
    pub fn probe_all(&mut self) -> &[ProbeReport] {
        self.reports = self.candidates.iter_mut().map(probe_candidate).collect();
        &self.reports
    }

    /// Probes all candidates and instantiates the single highest-priority one.
    pub fn select_active_model(
        &mut self,
        vehicle: &dyn Vehicle,
    ) -> Result<Box<dyn AerodynamicModel>, AeroError> {
        self.probe_all();
        let winner = resolve_winner(&self.reports)?;

        let report = &self.reports[winner];
        info!(
            backend = %report.backend,
            priority = report.priority,
            "selected aerodynamics backend"
        );
        self.candidates[winner].candidate.instantiate(vehicle)
    }
}

fn probe_candidate(registered: &mut Registered) -> ProbeReport {
    let backend = registered.candidate.name().to_string();

    if !registered.settings.enabled {
        debug!(%backend, "backend disabled by configuration");
        return ProbeReport {
            backend,
            priority: UNAVAILABLE_PRIORITY,
            status: ProbeStatus::Disabled,
        };
    }

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| registered.candidate.probe()))
        .unwrap_or_else(|_| Err(AeroError::probe_failed(&backend, "probe panicked")));

    match outcome {
        Ok(priority) if priority >= 0 => {
            let priority = registered.settings.priority.unwrap_or(priority);
            debug!(%backend, priority, "backend available");
            ProbeReport {
                backend,
                priority,
                status: ProbeStatus::Available,
            }
        }
        Ok(_) => {
            debug!(%backend, "backend unavailable");
            ProbeReport {
                backend,
                priority: UNAVAILABLE_PRIORITY,
                status: ProbeStatus::Unavailable,
            }
        }
        Err(err) => {
            warn!(%backend, "{}; treating backend as unavailable", err);
            ProbeReport {
                backend,
                priority: UNAVAILABLE_PRIORITY,
                status: ProbeStatus::Failed(err.to_string()),
            }
        }
    }
}

/// Index of the single available report with the highest priority.
///
/// Fails with [`AeroError::NoUsableBackend`] when nothing is available and
/// with [`AeroError::AmbiguousPriority`] when the highest priority is shared.
/// Ties below the highest priority are irrelevant, so the result does not
/// depend on report order.
pub fn resolve_winner(reports: &[ProbeReport]) -> Result<usize, AeroError> {
    let mut winner: Option<usize> = None;
    let mut tied_with: Option<usize> = None;
    let mut best = UNAVAILABLE_PRIORITY;

    for (index, report) in reports.iter().enumerate() {
        if !report.is_available() {
            continue;
        }
        match winner {
            Some(_) if report.priority < best => {}
            Some(_) if report.priority == best => {
                tied_with.get_or_insert(index);
            }
            _ => {
                winner = Some(index);
                best = report.priority;
                tied_with = None;
            }
        }
    }

    let winner = winner.ok_or(AeroError::NoUsableBackend {
        probed: reports.len(),
    })?;

    if let Some(other) = tied_with {
        return Err(AeroError::AmbiguousPriority {
            first: reports[winner].backend.clone(),
            second: reports[other].backend.clone(),
            priority: best,
        });
    }

    Ok(winner)
}
