//! Per-scale-set gauges and their typed setters.
//!
//! Every gauge vector is keyed by the six [`LABEL_NAMES`]. Setters are
//! absolute overwrites: the last write for a label tuple wins and nothing
//! accumulates. Concurrent writers are linearized by the gauge vectors
//! themselves; there is no ordering across different gauges.

use prometheus::core::Collector;
use prometheus::proto::LabelPair;
use prometheus::{GaugeVec, Opts, Registry};
use tracing::{debug, info};

use gha_scaleset_core::{CommonLabels, ListenerState, Result, ScaleSetError, LABEL_NAMES};

use super::catalog::{Metric, DEFAULT_SUBSYSTEM};

/// Pending/running/failed ephemeral runner counts read back for one scale set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EphemeralRunnerCounts {
    pub pending: i64,
    pub running: i64,
    pub failed: i64,
}

/// The controller's gauges, constructed once and handed to whatever reports
/// measurements. Clones share the same underlying series.
#[derive(Clone)]
pub struct ControllerMetrics {
    subsystem: String,
    pending_ephemeral_runners: GaugeVec,
    running_ephemeral_runners: GaugeVec,
    failed_ephemeral_runners: GaugeVec,
    running_listeners: GaugeVec,
    running_jobs: GaugeVec,
    queued_jobs: GaugeVec,
    idle_runners: GaugeVec,
    failed_jobs: GaugeVec,
    average_job_duration: GaugeVec,
    resource_utilization_cpu: GaugeVec,
    resource_utilization_memory: GaugeVec,
}

fn gauge_vec(subsystem: &str, metric: Metric) -> Result<GaugeVec> {
    let opts = Opts::new(metric.name(), metric.help()).subsystem(subsystem);
    GaugeVec::new(opts, &LABEL_NAMES).map_err(|e| {
        ScaleSetError::InvalidConfig(format!("metric {}: {e}", metric.fq_name(subsystem)))
    })
}

impl ControllerMetrics {
    /// Gauges under the `gha_controller` subsystem.
    pub fn new() -> Result<Self> {
        Self::with_subsystem(DEFAULT_SUBSYSTEM)
    }

    /// Fails with `InvalidConfig` when `subsystem` does not yield valid
    /// Prometheus metric names.
    pub fn with_subsystem(subsystem: &str) -> Result<Self> {
        Ok(Self {
            subsystem: subsystem.to_string(),
            pending_ephemeral_runners: gauge_vec(subsystem, Metric::PendingEphemeralRunners)?,
            running_ephemeral_runners: gauge_vec(subsystem, Metric::RunningEphemeralRunners)?,
            failed_ephemeral_runners: gauge_vec(subsystem, Metric::FailedEphemeralRunners)?,
            running_listeners: gauge_vec(subsystem, Metric::RunningListeners)?,
            running_jobs: gauge_vec(subsystem, Metric::RunningJobs)?,
            queued_jobs: gauge_vec(subsystem, Metric::QueuedJobs)?,
            idle_runners: gauge_vec(subsystem, Metric::IdleRunners)?,
            failed_jobs: gauge_vec(subsystem, Metric::FailedJobs)?,
            average_job_duration: gauge_vec(subsystem, Metric::AverageJobDuration)?,
            resource_utilization_cpu: gauge_vec(subsystem, Metric::ResourceUtilizationCpu)?,
            resource_utilization_memory: gauge_vec(subsystem, Metric::ResourceUtilizationMemory)?,
        })
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    fn gauge(&self, metric: Metric) -> &GaugeVec {
        match metric {
            Metric::PendingEphemeralRunners => &self.pending_ephemeral_runners,
            Metric::RunningEphemeralRunners => &self.running_ephemeral_runners,
            Metric::FailedEphemeralRunners => &self.failed_ephemeral_runners,
            Metric::RunningListeners => &self.running_listeners,
            Metric::RunningJobs => &self.running_jobs,
            Metric::QueuedJobs => &self.queued_jobs,
            Metric::IdleRunners => &self.idle_runners,
            Metric::FailedJobs => &self.failed_jobs,
            Metric::AverageJobDuration => &self.average_job_duration,
            Metric::ResourceUtilizationCpu => &self.resource_utilization_cpu,
            Metric::ResourceUtilizationMemory => &self.resource_utilization_memory,
        }
    }

    /// Register all gauges with `registry`, in catalog order.
    ///
    /// Stops at the first failure; gauges registered before it stay
    /// registered. A name that is already taken yields `AlreadyRegistered`.
    pub fn register(&self, registry: &Registry) -> Result<()> {
        for metric in Metric::ALL {
            registry
                .register(Box::new(self.gauge(metric).clone()))
                .map_err(|e| match e {
                    prometheus::Error::AlreadyReg => {
                        ScaleSetError::AlreadyRegistered(metric.fq_name(&self.subsystem))
                    }
                    other => ScaleSetError::Internal(format!(
                        "register {} failed: {other}",
                        metric.fq_name(&self.subsystem)
                    )),
                })?;
        }
        info!(subsystem = %self.subsystem, metrics = Metric::ALL.len(), "controller metrics registered");
        Ok(())
    }

    /// Register or die. Registering twice is a wiring bug, not something to
    /// recover from.
    pub fn must_register(&self, registry: &Registry) {
        if let Err(e) = self.register(registry) {
            panic!("controller metrics registration failed: {e}");
        }
    }

    /// [`ControllerMetrics::must_register`] against the process-wide registry.
    pub fn register_default(&self) {
        self.must_register(prometheus::default_registry());
    }

    fn set(&self, metric: Metric, labels: &CommonLabels, v: f64) {
        self.gauge(metric).with_label_values(&labels.values()).set(v);
    }

    /// Overwrite the three runner status gauges. The writes are independent;
    /// a concurrent reader may observe a mix of old and new values.
    pub fn set_ephemeral_runner_counts_by_status(
        &self,
        labels: &CommonLabels,
        pending: i64,
        running: i64,
        failed: i64,
    ) {
        self.set(Metric::PendingEphemeralRunners, labels, pending as f64);
        self.set(Metric::RunningEphemeralRunners, labels, running as f64);
        self.set(Metric::FailedEphemeralRunners, labels, failed as f64);
    }

    pub fn set_listener_state(&self, labels: &CommonLabels, state: ListenerState) {
        debug!(scale_set = %labels, ?state, "listener state");
        self.set(Metric::RunningListeners, labels, state.as_gauge());
    }

    /// Mark the listener up. Idempotent.
    pub fn add_running_listener(&self, labels: &CommonLabels) {
        self.set_listener_state(labels, ListenerState::Up);
    }

    /// Mark the listener down. Idempotent.
    pub fn sub_running_listener(&self, labels: &CommonLabels) {
        self.set_listener_state(labels, ListenerState::Down);
    }

    pub fn set_running_jobs(&self, labels: &CommonLabels, count: i64) {
        self.set(Metric::RunningJobs, labels, count as f64);
    }

    pub fn set_queued_jobs(&self, labels: &CommonLabels, count: i64) {
        self.set(Metric::QueuedJobs, labels, count as f64);
    }

    pub fn set_idle_runners(&self, labels: &CommonLabels, count: i64) {
        self.set(Metric::IdleRunners, labels, count as f64);
    }

    pub fn set_failed_jobs(&self, labels: &CommonLabels, count: i64) {
        self.set(Metric::FailedJobs, labels, count as f64);
    }

    /// Unit is whatever the caller standardizes on.
    pub fn set_average_job_duration(&self, labels: &CommonLabels, duration: f64) {
        self.set(Metric::AverageJobDuration, labels, duration);
    }

    /// Recorded as given; no normalization to a ratio or percentage.
    pub fn set_resource_utilization_cpu(&self, labels: &CommonLabels, utilization: f64) {
        self.set(Metric::ResourceUtilizationCpu, labels, utilization);
    }

    pub fn set_resource_utilization_memory(&self, labels: &CommonLabels, utilization: f64) {
        self.set(Metric::ResourceUtilizationMemory, labels, utilization);
    }

    /// Most recent value written for `labels`, or `None` if that tuple was
    /// never written. Does not create a series.
    pub fn value(&self, metric: Metric, labels: &CommonLabels) -> Option<f64> {
        let wanted = labels.values();
        let families = self.gauge(metric).collect();
        families
            .iter()
            .flat_map(|mf| mf.get_metric())
            .find(|m| label_pairs_match(m.get_label(), &wanted))
            .map(|m| m.get_gauge().get_value())
    }

    pub fn listener_state(&self, labels: &CommonLabels) -> Option<ListenerState> {
        self.value(Metric::RunningListeners, labels)
            .map(ListenerState::from_gauge)
    }

    /// Read the three runner status gauges. Not a consistent snapshot: each
    /// gauge is read separately.
    pub fn ephemeral_runner_counts(&self, labels: &CommonLabels) -> Option<EphemeralRunnerCounts> {
        Some(EphemeralRunnerCounts {
            pending: self.value(Metric::PendingEphemeralRunners, labels)? as i64,
            running: self.value(Metric::RunningEphemeralRunners, labels)? as i64,
            failed: self.value(Metric::FailedEphemeralRunners, labels)? as i64,
        })
    }
}

impl std::fmt::Debug for ControllerMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerMetrics")
            .field("subsystem", &self.subsystem)
            .finish()
    }
}

fn label_pairs_match(pairs: &[LabelPair], wanted: &[&str; 6]) -> bool {
    pairs.len() == LABEL_NAMES.len()
        && pairs.iter().all(|p| {
            LABEL_NAMES
                .iter()
                .position(|n| *n == p.get_name())
                .is_some_and(|i| wanted[i] == p.get_value())
        })
}
