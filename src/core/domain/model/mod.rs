mod connection;
mod fetch_state;
mod grouped_view;
mod health;
mod host;
mod host_group;
mod service_check;
mod snapshot;

pub use connection::MonitorConnection;
pub use fetch_state::FetchState;
pub use grouped_view::{GroupHealth, GroupedView, HostHealth};
pub use health::{DiskUsage, HealthMetrics, HostStatus};
pub use host::{HostListData, HostListEntry, HostState};
pub use host_group::{HostGroup, HostGroupList, HostGroupListData};
pub use service_check::{HostChecks, ServiceCheck, ServiceListData};
pub use snapshot::StatusSnapshot;
