//! Wire model for hosts from the `hostlist` query.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display classification of a host's raw status code.
///
/// The dashboard maps codes `0`/`1`/`2` to OK/Warning/Critical and
/// renders nothing for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

/// A host as returned by `statusjson.cgi?query=hostlist&details=true`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HostListEntry {
    /// The host name.
    pub name: String,
    /// Raw backend status code.
    pub status: i64,
    /// Last check time, epoch milliseconds.
    #[serde(default)]
    pub last_check: u64,
    /// The host check's human-readable output.
    #[serde(default)]
    pub plugin_output: String,
}

impl HostListEntry {
    /// Classifies the raw status code for display.
    #[must_use]
    pub fn state(&self) -> HostState {
        match self.status {
            0 => HostState::Ok,
            1 => HostState::Warning,
            2 => HostState::Critical,
            _ => HostState::Unknown,
        }
    }
}

/// Payload of the `hostlist` query.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HostListData {
    /// Hosts keyed by host name.
    pub hostlist: HashMap<String, HostListEntry>,
}
