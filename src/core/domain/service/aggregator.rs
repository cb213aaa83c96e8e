//! Per-host aggregation of named checks into one health record.

use crate::core::domain::model::{HealthMetrics, HostChecks, HostStatus, ServiceCheck};
use crate::core::domain::service::plugin_output::{
    extract_percentage, extract_used_mb, parse_disk_perfdata,
};
use std::collections::HashMap;

/// The service-label schema implied by the backend's monitoring
/// configuration.
///
/// The binding of labels like "CPU Usage" to semantic roles is
/// convention, not protocol; a backend with different label
/// conventions only requires swapping this mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceBindings {
    /// The reachability check's service name.
    pub host_alive: &'static str,
    /// The CPU check's service name.
    pub cpu: &'static str,
    /// The memory check's service name.
    pub memory: &'static str,
    /// The disk check's service name.
    pub disk: &'static str,
    /// Substring of the host-alive output that marks the host as up.
    pub ping_ok_marker: &'static str,
}

impl ServiceBindings {
    /// The labels used by the backend's stock configuration.
    pub const NAGIOS_DEFAULT: Self = Self {
        host_alive: "Host Alive",
        cpu: "CPU Usage",
        memory: "Memory Usage",
        disk: "Disk Space",
        ping_ok_marker: "PING OK",
    };
}

impl Default for ServiceBindings {
    fn default() -> Self {
        Self::NAGIOS_DEFAULT
    }
}

/// Folds one host's named checks into one `HealthMetrics`.
///
/// Pure function of its input map. Status is a substring containment
/// test on the host-alive output, not a full parse; any other content
/// (or an absent check) means down. CPU and memory fall back to `None`
/// when absent or unparseable; disk falls back to `{0, 0}`, the
/// chart-safety asymmetry the display layer depends on.
#[must_use]
pub fn aggregate_host(
    checks: &HashMap<String, ServiceCheck>,
    bindings: &ServiceBindings,
) -> HealthMetrics {
    let status = match checks.get(bindings.host_alive) {
        Some(alive) if alive.plugin_output.contains(bindings.ping_ok_marker) => HostStatus::Up,
        _ => HostStatus::Down,
    };

    let cpu = checks
        .get(bindings.cpu)
        .and_then(|check| extract_percentage(&check.plugin_output));

    let memory_mb = checks
        .get(bindings.memory)
        .and_then(|check| extract_used_mb(&check.plugin_output));

    let disk = checks
        .get(bindings.disk)
        .and_then(|check| parse_disk_perfdata(check.perf_data.as_deref()))
        .unwrap_or_default();

    HealthMetrics {
        cpu,
        memory_mb,
        disk,
        status,
    }
}

/// Aggregates every host of a fetch cycle.
#[must_use]
pub fn aggregate_snapshot(
    checks: &HostChecks,
    bindings: &ServiceBindings,
) -> HashMap<String, HealthMetrics> {
    checks
        .iter()
        .map(|(host, host_checks)| (host.clone(), aggregate_host(host_checks, bindings)))
        .collect()
}
