//! Shared application state for the tally server.
//!
//! One `CounterRegistry` is built here at startup and shared by every
//! request handler for the life of the process.

use std::sync::Arc;

use tally_core::CounterRegistry;

use crate::config::TallyConfig;
use crate::obs::ServerMetrics;

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<TallyConfig>,
    registry: Arc<CounterRegistry>,
    metrics: Arc<ServerMetrics>,
}

impl AppState {
    pub fn new(cfg: TallyConfig) -> Self {
        Self::with_registry(cfg, Arc::new(CounterRegistry::new()))
    }

    /// Build state around an existing registry handle.
    pub fn with_registry(cfg: TallyConfig, registry: Arc<CounterRegistry>) -> Self {
        Self {
            cfg: Arc::new(cfg),
            registry,
            metrics: Arc::new(ServerMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &TallyConfig {
        &self.cfg
    }

    pub fn registry(&self) -> &CounterRegistry {
        &self.registry
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.metrics
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }

    /// Gauges appended to `/metrics`.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![("tally_counters_live", self.registry.len() as u64)]
    }
}
