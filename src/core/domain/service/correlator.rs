//! Correlation of host-group membership with computed health records.

use crate::core::domain::model::{GroupHealth, GroupedView, HealthMetrics, HostGroup, HostHealth};
use std::collections::HashMap;

/// Left-joins group membership against the computed metrics map.
///
/// Group order and member order are preserved exactly as received from
/// the backend. A member with no check data is omitted from the
/// group's host list; a group with zero resolvable members is still
/// emitted so the group structure stays visible.
#[must_use]
pub fn correlate(groups: &[HostGroup], metrics: &HashMap<String, HealthMetrics>) -> GroupedView {
    let groups = groups
        .iter()
        .map(|group| GroupHealth {
            name: group.name.clone(),
            hosts: group
                .members
                .iter()
                .filter_map(|member| {
                    metrics.get(member).map(|m| HostHealth {
                        host_name: member.clone(),
                        metrics: m.clone(),
                    })
                })
                .collect(),
        })
        .collect();

    GroupedView { groups }
}
