mod monitor_host;
mod monitor_password;
mod monitor_port;
mod monitor_url;
mod monitor_username;

pub use monitor_host::MonitorHost;
pub use monitor_password::MonitorPassword;
pub use monitor_port::MonitorPort;
pub use monitor_url::MonitorUrl;
pub use monitor_username::MonitorUsername;

// Re-export validation functions for internal use
pub(crate) use monitor_host::validate_host;
pub(crate) use monitor_password::validate_password;
pub(crate) use monitor_port::validate_port;
pub(crate) use monitor_url::validate_url;
pub(crate) use monitor_username::validate_username;
