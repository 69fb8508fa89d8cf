//! Catalog of controller gauges: short names, help text, registration order.

/// Subsystem every metric name is prefixed with unless configured otherwise.
pub const DEFAULT_SUBSYSTEM: &str = "gha_controller";

/// One gauge tracked per scale set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    PendingEphemeralRunners,
    RunningEphemeralRunners,
    FailedEphemeralRunners,
    RunningListeners,
    RunningJobs,
    QueuedJobs,
    IdleRunners,
    FailedJobs,
    AverageJobDuration,
    ResourceUtilizationCpu,
    ResourceUtilizationMemory,
}

impl Metric {
    /// All gauges, in registration order.
    pub const ALL: [Metric; 11] = [
        Metric::PendingEphemeralRunners,
        Metric::RunningEphemeralRunners,
        Metric::FailedEphemeralRunners,
        Metric::RunningListeners,
        Metric::RunningJobs,
        Metric::QueuedJobs,
        Metric::IdleRunners,
        Metric::FailedJobs,
        Metric::AverageJobDuration,
        Metric::ResourceUtilizationCpu,
        Metric::ResourceUtilizationMemory,
    ];

    /// Name without the subsystem prefix.
    pub fn name(self) -> &'static str {
        match self {
            Metric::PendingEphemeralRunners => "pending_ephemeral_runners",
            Metric::RunningEphemeralRunners => "running_ephemeral_runners",
            Metric::FailedEphemeralRunners => "failed_ephemeral_runners",
            Metric::RunningListeners => "running_listeners",
            Metric::RunningJobs => "running_jobs",
            Metric::QueuedJobs => "queued_jobs",
            Metric::IdleRunners => "idle_runners",
            Metric::FailedJobs => "failed_jobs",
            Metric::AverageJobDuration => "average_job_duration",
            Metric::ResourceUtilizationCpu => "resource_utilization_cpu",
            Metric::ResourceUtilizationMemory => "resource_utilization_memory",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Metric::PendingEphemeralRunners => "Number of ephemeral runners in a pending state.",
            Metric::RunningEphemeralRunners => "Number of ephemeral runners in a running state.",
            Metric::FailedEphemeralRunners => "Number of ephemeral runners in a failed state.",
            Metric::RunningListeners => "Number of listeners in a running state.",
            Metric::RunningJobs => "Number of running jobs.",
            Metric::QueuedJobs => "Number of queued jobs.",
            Metric::IdleRunners => "Number of idle runners.",
            Metric::FailedJobs => "Number of failed jobs.",
            Metric::AverageJobDuration => "Average job duration.",
            Metric::ResourceUtilizationCpu => "Resource utilization (CPU).",
            Metric::ResourceUtilizationMemory => "Resource utilization (Memory).",
        }
    }

    /// Fully qualified name as exported: `<subsystem>_<name>`.
    pub fn fq_name(self, subsystem: &str) -> String {
        format!("{}_{}", subsystem, self.name())
    }
}
