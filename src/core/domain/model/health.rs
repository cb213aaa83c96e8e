//! Derived per-host health records.
//!
//! These are pure functions of one fetch cycle's raw data: recomputed
//! fresh on every cycle, replaced wholesale, never partially mutated.

use serde::{Deserialize, Serialize};

/// Host reachability derived from the host-alive check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostStatus {
    Up,
    Down,
}

/// Disk usage in whole megabytes, as reported by the check's perf data.
///
/// The default (`{0, 0}`) is the aggregator's display-safety fallback
/// for hosts with no parseable disk check. A successfully parsed value
/// always carries a non-zero `total_mb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct DiskUsage {
    /// Used space in MB.
    pub used_mb: u64,
    /// Total space in MB (the perf-data max threshold).
    pub total_mb: u64,
}

impl DiskUsage {
    /// Free space in MB. Saturating, so a chart consuming
    /// `(used_mb, free_mb)` never sees a negative slice.
    #[must_use]
    pub fn free_mb(&self) -> u64 {
        self.total_mb.saturating_sub(self.used_mb)
    }

    /// Used-space percentage, or `None` for the `{0, 0}` fallback.
    #[must_use]
    pub fn percent_used(&self) -> Option<f64> {
        if self.total_mb == 0 {
            return None;
        }
        Some(self.used_mb as f64 * 100.0 / self.total_mb as f64)
    }
}

/// The normalized health record for one host.
///
/// `cpu` and `memory_mb` are `None` when the corresponding check is
/// absent or its output does not match the expected pattern; `disk`
/// falls back to zeros instead. The asymmetry is deliberate and load
/// bearing for the disk chart, which requires numeric inputs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HealthMetrics {
    /// CPU usage percentage from the CPU check's plugin output.
    pub cpu: Option<f64>,
    /// Used memory in MB from the memory check's plugin output.
    pub memory_mb: Option<u64>,
    /// Disk usage from the disk check's perf data, or `{0, 0}`.
    pub disk: DiskUsage,
    /// Host reachability.
    pub status: HostStatus,
}
