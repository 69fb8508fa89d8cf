//! Shared application state for the metrics exporter.
//!
//! Owns the registry the `/metrics` endpoint renders and the
//! `ControllerMetrics` provider registered into it. Startup errors are
//! returned as `Result` so `main` decides how to exit.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use prometheus::Registry;

use gha_scaleset_core::error::Result;

use crate::config::ExporterConfig;
use crate::obs::{self, ControllerMetrics};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    registry: Registry,
    metrics: ControllerMetrics,
    draining: AtomicBool,
}

impl AppState {
    /// Build the provider from config and register it with a fresh registry.
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let registry = Registry::new();
        let metrics = ControllerMetrics::with_subsystem(&cfg.exporter.subsystem)?;
        metrics.register(&registry)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                metrics,
                draining: AtomicBool::new(false),
            }),
        })
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    /// Provider handle for whatever reports measurements.
    pub fn metrics(&self) -> ControllerMetrics {
        self.inner.metrics.clone()
    }

    pub fn set_draining(&self) {
        self.inner.draining.store(true, Ordering::Relaxed);
    }

    pub fn is_draining(&self) -> bool {
        self.inner.draining.load(Ordering::Relaxed)
    }

    /// Text exposition of the registry.
    pub fn render_metrics(&self) -> Result<String> {
        obs::encode_text(&self.inner.registry)
    }
}
