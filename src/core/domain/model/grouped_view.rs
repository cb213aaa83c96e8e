//! The grouped display view consumed by the presentation layer.

use crate::core::domain::model::health::HealthMetrics;
use serde::{Deserialize, Serialize};

/// One host and its computed health record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HostHealth {
    /// The host name.
    pub host_name: String,
    /// The host's normalized health record.
    pub metrics: HealthMetrics,
}

/// One host group with its resolvable members.
///
/// Members without check data are omitted at correlation time; a group
/// may therefore be empty while still being rendered.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GroupHealth {
    /// The group name.
    pub name: String,
    /// Member hosts with health data, in membership order.
    pub hosts: Vec<HostHealth>,
}

/// The full grouped view of one fetch cycle, in backend group order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct GroupedView {
    /// Groups in backend order.
    pub groups: Vec<GroupHealth>,
}

impl GroupedView {
    /// Returns `true` if no groups were received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
