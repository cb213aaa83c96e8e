//! Named-pattern extractors for check plugin output.
//!
//! Check output has no formal grammar; metrics are carried by
//! convention inside free text and perf-data strings. Each extractor
//! owns exactly one named pattern and returns `None` when it is absent
//! or malformed. Absence of a pattern is a normal, silent outcome:
//! never an error, and never a zero default (zero is a valid
//! measurement and must stay distinguishable from "unknown").

use crate::core::domain::model::DiskUsage;
use regex::Regex;
use std::sync::LazyLock;

/// A decimal number immediately followed by `%`.
static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)%").unwrap());

/// The literal `Used: <integer> MB`, case-sensitive as the backend's
/// memory check emits it.
static USED_MB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Used: (\d+) MB").unwrap());

/// The disk check's first perf-data field:
/// `/=<used>MB;<warn>;<crit>;<min>;<max>`.
static DISK_PERFDATA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/=(\d+)MB;\d+;\d+;\d+;(\d+)").unwrap());

/// Extracts a percentage value from free-text check output.
///
/// Digits not directly followed by `%` never match.
///
/// # Arguments
///
/// * `text` - The plugin output to search
///
/// # Returns
///
/// The parsed value, or `None` if no `%`-suffixed number is present.
#[must_use]
pub fn extract_percentage(text: &str) -> Option<f64> {
    PERCENTAGE
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// Extracts a used-megabytes value from free-text check output.
///
/// # Arguments
///
/// * `text` - The plugin output to search
///
/// # Returns
///
/// The parsed integer, or `None` if `Used: <n> MB` is absent.
#[must_use]
pub fn extract_used_mb(text: &str) -> Option<u64> {
    USED_MB.captures(text).and_then(|caps| caps[1].parse().ok())
}

/// Parses the disk check's perf-data string.
///
/// The used-space value comes from the first field's value, the total
/// from its final threshold (the max). A max of zero is treated as
/// malformed: a parsed `DiskUsage` always carries a non-zero total so
/// the later percentage computation is safe.
///
/// # Arguments
///
/// * `perf_data` - The perf-data string, if the check carried one
///
/// # Returns
///
/// The parsed usage, or `None` if the input is absent or does not
/// match the expected shape.
#[must_use]
pub fn parse_disk_perfdata(perf_data: Option<&str>) -> Option<DiskUsage> {
    let caps = DISK_PERFDATA.captures(perf_data?)?;
    let used_mb = caps[1].parse().ok()?;
    let total_mb: u64 = caps[2].parse().ok()?;
    if total_mb == 0 {
        return None;
    }
    Some(DiskUsage { used_mb, total_mb })
}
