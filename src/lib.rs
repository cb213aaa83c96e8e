mod config;
mod core;

#[cfg(test)]
mod tests;

pub use crate::config::{ClientConfig, RateLimitConfig};
pub use crate::core::domain::error::{NagboardError, NagboardResult, ValidationError};
pub use crate::core::domain::model::{
    DiskUsage, FetchState, GroupHealth, GroupedView, HealthMetrics, HostChecks, HostGroup,
    HostGroupList, HostGroupListData, HostHealth, HostListData, HostListEntry, HostState,
    HostStatus, MonitorConnection, ServiceCheck, ServiceListData, StatusSnapshot,
};
pub use crate::core::domain::service::aggregator::{
    ServiceBindings, aggregate_host, aggregate_snapshot,
};
pub use crate::core::domain::service::correlator::correlate;
pub use crate::core::domain::service::plugin_output::{
    extract_percentage, extract_used_mb, parse_disk_perfdata,
};
pub use crate::core::domain::value_object::{
    MonitorHost, MonitorPassword, MonitorPort, MonitorUrl, MonitorUsername,
};
pub use crate::core::infrastructure::api_client::StatusApiClient;
pub use crate::core::infrastructure::orchestrator::FetchOrchestrator;
pub use crate::core::infrastructure::source::StatusSource;

use crate::core::domain::value_object::{
    validate_host, validate_password, validate_port, validate_url, validate_username,
};
use std::collections::HashMap;

const DEFAULT_PORT: u16 = 443;
const DEFAULT_BASE_PATH: &str = "/nagios4/cgi-bin";

/// A client for a Nagios-compatible status JSON API
///
/// This client provides a safe, ergonomic interface for:
/// - Querying host groups, services, and hosts
/// - Fetching a consistent raw snapshot of one fetch cycle
/// - Deriving the grouped per-host health view a dashboard renders
///
/// # Examples
///
/// ```no_run
/// use nagboard::{NagboardClient, NagboardResult};
///
/// #[tokio::main]
/// async fn main() -> NagboardResult<()> {
///     let client = NagboardClient::builder()
///         .host("nagios.example.com")?
///         .credentials("nagiosadmin", "password")?
///         .secure(true)
///         .build()
///         .await?;
///
///     let view = client.grouped_view().await?;
///     for group in &view.groups {
///         println!("{}: {} hosts with data", group.name, group.hosts.len());
///     }
///     Ok(())
/// }
/// ```
pub struct NagboardClient {
    api_client: StatusApiClient,
}

/// Builder for NagboardClient configuration
#[derive(Debug, Default)]
pub struct NagboardClientBuilder {
    host: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<String>,
    base_path: Option<String>,
    secure: bool,
    accept_invalid_certs: bool,
    config: ClientConfig,
}

impl NagboardClientBuilder {
    pub fn host(mut self, host: impl Into<String>) -> NagboardResult<Self> {
        self.host = Some(host.into());
        Ok(self)
    }

    pub fn port(mut self, port: u16) -> NagboardResult<Self> {
        self.port = Some(port);
        Ok(self)
    }

    pub fn credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> NagboardResult<Self> {
        self.username = Some(username.into());
        self.password = Some(password.into());
        Ok(self)
    }

    /// Overrides the CGI base path (default `/nagios4/cgi-bin`).
    pub fn base_path(mut self, base_path: impl Into<String>) -> NagboardResult<Self> {
        self.base_path = Some(base_path.into());
        Ok(self)
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Accepts self-signed certificates. Use only against backends you
    /// control.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn build(self) -> NagboardResult<NagboardClient> {
        let host = self.host.ok_or_else(|| ValidationError::Field {
            field: "host".to_string(),
            message: "Host is required".to_string(),
        })?;
        validate_host(&host)?;

        let port = self.port.unwrap_or(DEFAULT_PORT);
        validate_port(port)?;

        let username = self.username.ok_or_else(|| ValidationError::Field {
            field: "username".to_string(),
            message: "Username is required".to_string(),
        })?;
        validate_username(&username, self.config.block_reserved_usernames)?;

        let password = self.password.ok_or_else(|| ValidationError::Field {
            field: "password".to_string(),
            message: "Password is required".to_string(),
        })?;
        validate_password(&password, self.config.password_min_score)?;

        let host = MonitorHost::new_unchecked(host);
        let port = MonitorPort::new_unchecked(port);
        let base_path = self
            .base_path
            .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());

        let url = MonitorUrl::compose(&host, port, self.secure, &base_path);
        validate_url(&url)?;

        let connection = MonitorConnection::new(
            host,
            port,
            MonitorUsername::new_unchecked(username),
            MonitorPassword::new_unchecked(password),
            self.secure,
            self.accept_invalid_certs,
            MonitorUrl::new_unchecked(url),
        );

        let api_client = StatusApiClient::new(connection, &self.config)?;
        Ok(NagboardClient { api_client })
    }
}

impl NagboardClient {
    /// Creates a new builder for NagboardClient configuration
    pub fn builder() -> NagboardClientBuilder {
        NagboardClientBuilder::default()
    }

    /// Returns the connection details the client was built with.
    pub fn connection(&self) -> &MonitorConnection {
        self.api_client.connection()
    }

    /// Fetches all host groups, in backend order.
    ///
    /// # Errors
    /// Returns `NagboardError` if the query fails.
    pub async fn host_groups(&self) -> NagboardResult<Vec<HostGroup>> {
        self.api_client.host_group_list().await
    }

    /// Fetches every host's check results.
    ///
    /// # Errors
    /// Returns `NagboardError` if the query fails.
    pub async fn services(&self) -> NagboardResult<HostChecks> {
        self.api_client.service_list().await
    }

    /// Fetches the host list with per-host status.
    ///
    /// # Errors
    /// Returns `NagboardError` if the query fails.
    pub async fn hosts(&self) -> NagboardResult<HashMap<String, HostListEntry>> {
        self.api_client.host_list().await
    }

    /// Fetches one complete, consistent raw snapshot.
    ///
    /// Both required queries run concurrently; if either fails the
    /// whole snapshot fails and partial results are discarded.
    ///
    /// # Errors
    /// Returns `NagboardError` if any query fails.
    pub async fn snapshot(&self) -> NagboardResult<StatusSnapshot> {
        let (host_groups, checks) = tokio::try_join!(
            self.api_client.host_group_list(),
            self.api_client.service_list()
        )?;
        Ok(StatusSnapshot {
            host_groups,
            checks,
        })
    }

    /// Fetches a snapshot and derives the grouped health view with the
    /// stock service-label bindings.
    ///
    /// # Errors
    /// Returns `NagboardError` if any query fails.
    pub async fn grouped_view(&self) -> NagboardResult<GroupedView> {
        let snapshot = self.snapshot().await?;
        Ok(snapshot.grouped_view(&ServiceBindings::default()))
    }

    /// Consumes the client and returns a fetch orchestrator driving it.
    pub fn into_orchestrator(self) -> FetchOrchestrator<StatusApiClient> {
        FetchOrchestrator::new(self.api_client)
    }
}
