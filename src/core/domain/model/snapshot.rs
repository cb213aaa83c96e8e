//! One fetch cycle's immutable raw snapshot.

use crate::core::domain::model::grouped_view::GroupedView;
use crate::core::domain::model::host_group::HostGroup;
use crate::core::domain::model::service_check::HostChecks;
use crate::core::domain::service::aggregator::{ServiceBindings, aggregate_snapshot};
use crate::core::domain::service::correlator::correlate;

/// The raw collections of one complete fetch cycle.
///
/// Owned exclusively by the cycle that produced it and replaced
/// wholesale by the next one; derived views are pure functions of this
/// data and are never cached across cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    /// Host groups in backend order.
    pub host_groups: Vec<HostGroup>,
    /// All hosts' check results.
    pub checks: HostChecks,
}

impl StatusSnapshot {
    /// Runs the full correlation pipeline (aggregate, then correlate)
    /// over this snapshot.
    #[must_use]
    pub fn grouped_view(&self, bindings: &ServiceBindings) -> GroupedView {
        let metrics = aggregate_snapshot(&self.checks, bindings);
        correlate(&self.host_groups, &metrics)
    }
}
