//! gha-scaleset metrics library entry.
//!
//! Defines the per-scale-set controller gauges (`obs`) and the small exporter
//! around them: strict config, shared state, and the `/healthz`, `/readyz`,
//! `/metrics` endpoints. Controllers embed `ControllerMetrics` directly, or
//! mount `router::build_router` to serve their registry.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;

pub use obs::{ControllerMetrics, EphemeralRunnerCounts, Metric, DEFAULT_SUBSYSTEM};
