//! Controller metrics backed by the `prometheus` crate.
//!
//! `catalog` names the gauges, `metrics` owns the gauge vectors and the typed
//! setters, `exposition` renders a registry for scraping.

pub mod catalog;
pub mod exposition;
pub mod metrics;

pub use catalog::{Metric, DEFAULT_SUBSYSTEM};
pub use exposition::encode_text;
pub use metrics::{ControllerMetrics, EphemeralRunnerCounts};
