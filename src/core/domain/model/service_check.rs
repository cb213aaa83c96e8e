//! Wire model for service check results from the `servicelist` query.
//!
//! Service names are free text chosen by the monitoring configuration
//! (e.g. "CPU Usage", "Disk Space"), not a closed enum; they appear as
//! map keys in the payload.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One named check result for one host, as returned by
/// `statusjson.cgi?query=servicelist&details=true`.
///
/// Unknown backend fields are ignored; only the text the correlation
/// engine consumes is modeled.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceCheck {
    /// The human-readable check output (e.g. "PING OK - 1.2ms").
    #[serde(default)]
    pub plugin_output: String,
    /// The structured performance-data string, if the plugin emitted one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perf_data: Option<String>,
}

/// Mapping from host name to that host's checks, keyed by service name.
///
/// Key order is irrelevant; one fetch cycle owns the map exclusively and
/// replaces it wholesale on the next cycle.
pub type HostChecks = HashMap<String, HashMap<String, ServiceCheck>>;

/// Payload of the `servicelist` query.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceListData {
    /// Check results keyed by host, then by service name.
    pub servicelist: HostChecks,
}
