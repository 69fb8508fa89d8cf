//! Scale set identity and listener state.
//!
//! Every gauge is partitioned by the same six labels. `CommonLabels` is the
//! only way to address a series, so a call site can never supply the wrong
//! number of label values.

use std::fmt;

/// Label keys in schema order. Values from [`CommonLabels::values`] line up
/// with this array index for index.
pub const LABEL_NAMES: [&str; 6] = [
    "name",
    "namespace",
    "repository",
    "organization",
    "enterprise",
    "listener_type",
];

/// Identity of the scaling entity a measurement belongs to.
///
/// Uniqueness is the caller's concern: the same scale set must always be
/// described by the same tuple, otherwise it shows up as separate series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CommonLabels {
    pub name: String,
    pub namespace: String,
    pub repository: String,
    pub organization: String,
    pub enterprise: String,
    pub listener_type: String,
}

impl CommonLabels {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }

    pub fn with_enterprise(mut self, enterprise: impl Into<String>) -> Self {
        self.enterprise = enterprise.into();
        self
    }

    pub fn with_listener_type(mut self, listener_type: impl Into<String>) -> Self {
        self.listener_type = listener_type.into();
        self
    }

    /// Label values in [`LABEL_NAMES`] order.
    pub fn values(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.namespace.as_str(),
            self.repository.as_str(),
            self.organization.as_str(),
            self.enterprise.as_str(),
            self.listener_type.as_str(),
        ]
    }
}

impl fmt::Display for CommonLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Liveness of a scale set's listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerState {
    Up,
    Down,
}

impl ListenerState {
    /// Gauge encoding used at the reporting boundary.
    pub fn as_gauge(self) -> f64 {
        match self {
            ListenerState::Up => 1.0,
            ListenerState::Down => 0.0,
        }
    }

    /// Inverse of [`ListenerState::as_gauge`]; anything at or above 0.5 is up.
    pub fn from_gauge(v: f64) -> Self {
        if v >= 0.5 {
            ListenerState::Up
        } else {
            ListenerState::Down
        }
    }
}
