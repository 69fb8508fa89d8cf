//! Prometheus text exposition of a registry.

use prometheus::{Encoder, Registry, TextEncoder};

use gha_scaleset_core::{Result, ScaleSetError};

/// Render every family gathered from `registry` in text format 0.0.4.
pub fn encode_text(registry: &Registry) -> Result<String> {
    let families = registry.gather();
    let mut buf = Vec::new();
    TextEncoder::new()
        .encode(&families, &mut buf)
        .map_err(|e| ScaleSetError::Internal(format!("encode metrics failed: {e}")))?;
    String::from_utf8(buf)
        .map_err(|e| ScaleSetError::Internal(format!("metrics output not utf-8: {e}")))
}
