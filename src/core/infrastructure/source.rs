//! The seam between the fetch orchestrator and the concrete API client.

use crate::core::domain::error::NagboardResult;
use crate::core::domain::model::{HostChecks, HostGroup};
use crate::core::infrastructure::api_client::StatusApiClient;
use async_trait::async_trait;

/// A source of the two raw collections a fetch cycle requires.
///
/// Implemented by `StatusApiClient`; mocked in orchestrator tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches all host groups, in backend order.
    async fn host_groups(&self) -> NagboardResult<Vec<HostGroup>>;

    /// Fetches every host's check results.
    async fn service_checks(&self) -> NagboardResult<HostChecks>;
}

#[async_trait]
impl StatusSource for StatusApiClient {
    async fn host_groups(&self) -> NagboardResult<Vec<HostGroup>> {
        self.host_group_list().await
    }

    async fn service_checks(&self) -> NagboardResult<HostChecks> {
        self.service_list().await
    }
}
