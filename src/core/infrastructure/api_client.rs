//! HTTP client for the monitoring server's JSON query CGI.

use crate::config::ClientConfig;
use crate::core::domain::error::{NagboardError, NagboardResult};
use crate::core::domain::model::{
    HostChecks, HostGroup, HostGroupListData, HostListData, HostListEntry, MonitorConnection,
    ServiceListData,
};
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{Client, StatusCode, header::ACCEPT};
use serde::Deserialize;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, warn};

/// Response envelope wrapped around every `statusjson.cgi` payload.
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    data: T,
}

/// Just the envelope's `result` object, decoded before the payload so
/// backend-reported failures surface even when `data` is absent or has
/// an unexpected shape.
#[derive(Debug, Default, Deserialize)]
struct ResultEnvelope {
    #[serde(default)]
    result: QueryResult,
}

/// The envelope's `result` object. `type_code` zero means success;
/// anything else carries the backend's own error text.
#[derive(Debug, Default, Deserialize)]
struct QueryResult {
    #[serde(default)]
    type_code: i64,
    #[serde(default)]
    type_text: String,
    #[serde(default)]
    message: String,
}

/// HTTP client that issues authenticated queries against the status CGI.
///
/// Every request carries HTTP basic auth; the CGI is stateless, so
/// there is no session to establish or refresh. Rate limiting is
/// optional and applied before each request when configured.
pub struct StatusApiClient {
    http_client: Client,
    connection: Arc<MonitorConnection>,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl StatusApiClient {
    /// Creates a new `StatusApiClient`.
    ///
    /// # Errors
    /// Returns `NagboardError::Connection` if the HTTP client cannot be built.
    pub fn new(connection: MonitorConnection, config: &ClientConfig) -> NagboardResult<Self> {
        let http_client = Client::builder()
            .danger_accept_invalid_certs(connection.accept_invalid_certs())
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| NagboardError::Connection(e.to_string()))?;

        let rate_limiter = config.rate_limit.map(|rl| {
            let quota = Quota::per_second(NonZeroU32::new(rl.requests_per_second).unwrap())
                .allow_burst(NonZeroU32::new(rl.burst_size).unwrap());
            Arc::new(DefaultDirectRateLimiter::direct(quota))
        });

        Ok(Self {
            http_client,
            connection: Arc::new(connection),
            rate_limiter,
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &MonitorConnection {
        &self.connection
    }

    /// Performs one authenticated status query.
    ///
    /// # Type Parameters
    /// - `T`: The expected payload type under the envelope's `data` key.
    ///
    /// # Errors
    /// Returns `NagboardError` if the request fails, the backend rejects
    /// the credentials, the envelope reports an error, or the response
    /// cannot be parsed.
    pub async fn query<T>(&self, query: &str) -> NagboardResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        // Apply rate limiting if enabled
        if let Some(limiter) = &self.rate_limiter {
            // `until_ready()` returns a future that completes when capacity is available.
            limiter.until_ready().await;
        }

        let base = self.connection.url().as_str().trim_end_matches('/');
        let url = format!("{}/statusjson.cgi?query={}&details=true", base, query);

        debug!(query, "dispatching status query");

        let response = self
            .http_client
            .get(&url)
            .basic_auth(
                self.connection.username().as_str(),
                Some(self.connection.password().as_str()),
            )
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| NagboardError::Connection(format!("HTTP request failed: {}", e)))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(NagboardError::Authentication(
                    "Backend rejected the provided credentials".to_string(),
                ));
            }
            status if !status.is_success() => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown".to_string());
                return Err(NagboardError::Api(format!(
                    "query failed ({}): {}",
                    status, error_text
                )));
            }
            _ => {}
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| NagboardError::Connection(format!("Failed to read response: {}", e)))?;

        let status: ResultEnvelope = serde_json::from_slice(&bytes)
            .map_err(|e| NagboardError::Connection(format!("Failed to parse response: {}", e)))?;
        if status.result.type_code != 0 {
            warn!(
                query,
                type_code = status.result.type_code,
                "backend reported query failure"
            );
            return Err(NagboardError::Api(format!(
                "{}: {}",
                status.result.type_text, status.result.message
            )));
        }

        let envelope: QueryResponse<T> = serde_json::from_slice(&bytes)
            .map_err(|e| NagboardError::Connection(format!("Failed to parse response: {}", e)))?;
        Ok(envelope.data)
    }

    /// Fetches all host groups, in backend order.
    ///
    /// # Errors
    /// Returns `NagboardError` if the query fails.
    pub async fn host_group_list(&self) -> NagboardResult<Vec<HostGroup>> {
        let data: HostGroupListData = self.query("hostgrouplist").await?;
        Ok(data.hostgrouplist.into_inner())
    }

    /// Fetches every host's check results.
    ///
    /// # Errors
    /// Returns `NagboardError` if the query fails.
    pub async fn service_list(&self) -> NagboardResult<HostChecks> {
        let data: ServiceListData = self.query("servicelist").await?;
        Ok(data.servicelist)
    }

    /// Fetches the host list with per-host status.
    ///
    /// # Errors
    /// Returns `NagboardError` if the query fails.
    pub async fn host_list(&self) -> NagboardResult<HashMap<String, HostListEntry>> {
        let data: HostListData = self.query("hostlist").await?;
        Ok(data.hostlist)
    }
}
