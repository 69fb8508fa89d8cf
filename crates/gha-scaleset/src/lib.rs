//! Top-level facade crate for gha-scaleset.
//!
//! Re-exports the core types and the metrics library so users can depend on a single crate.

pub mod core {
    pub use gha_scaleset_core::*;
}

pub mod metrics {
    pub use gha_scaleset_metrics::*;
}
