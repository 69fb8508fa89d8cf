use std::net::SocketAddr;

use serde::Deserialize;
use gha_scaleset_core::error::{Result, ScaleSetError};

use crate::obs::DEFAULT_SUBSYSTEM;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ScaleSetError::UnsupportedVersion);
        }
        self.exporter.validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_subsystem")]
    pub subsystem: String,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            subsystem: default_subsystem(),
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !is_valid_subsystem(&self.subsystem) {
            return Err(ScaleSetError::InvalidConfig(format!(
                "exporter.subsystem must match [a-zA-Z_][a-zA-Z0-9_]*, got {:?}",
                self.subsystem
            )));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            ScaleSetError::InvalidConfig(format!(
                "exporter.listen must be a valid socket address, got {:?}",
                self.listen
            ))
        })
    }
}

fn is_valid_subsystem(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_subsystem() -> String {
    DEFAULT_SUBSYSTEM.into()
}
