//! Wire model for host groups from the `hostgrouplist` query.
//!
//! The backend emits groups as a JSON object keyed by group name. Group
//! display order must match the backend, so the list is deserialized
//! with a map visitor that keeps document order instead of going
//! through an unordered map.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A named collection of hosts for organizational display.
///
/// Member order matters only for stable display ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostGroup {
    /// The group name (the key in the backend's payload).
    pub name: String,
    /// Member host names, in backend order.
    pub members: Vec<String>,
}

/// All host groups of one fetch cycle, in backend document order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HostGroupList(pub Vec<HostGroup>);

impl HostGroupList {
    /// Returns the groups as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[HostGroup] {
        &self.0
    }

    /// Consumes the list and returns the inner vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<HostGroup> {
        self.0
    }
}

/// Per-group detail object in the backend payload.
#[derive(Deserialize)]
struct GroupDetail {
    #[serde(default)]
    members: Vec<String>,
}

impl<'de> Deserialize<'de> for HostGroupList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GroupMapVisitor;

        impl<'de> Visitor<'de> for GroupMapVisitor {
            type Value = HostGroupList;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of group name to group details")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, detail)) = map.next_entry::<String, GroupDetail>()? {
                    groups.push(HostGroup {
                        name,
                        members: detail.members,
                    });
                }
                Ok(HostGroupList(groups))
            }
        }

        deserializer.deserialize_map(GroupMapVisitor)
    }
}

/// Payload of the `hostgrouplist` query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HostGroupListData {
    /// Host groups in backend document order.
    pub hostgrouplist: HostGroupList,
}
