//! 记录过滤
//!
//! 纯函数：不发请求、不改顺序、不去重。

use std::collections::HashSet;

use crate::types::DnsRecord;

/// Criteria for narrowing a fetched record set by name.
///
/// Both fields are optional and combine with AND semantics when both are
/// present. All comparisons are case-insensitive. An empty criteria set
/// matches everything.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Exact record names to keep. Empty means no exact-name constraint.
    pub exact_names: Vec<String>,
    /// Substring the record name must contain. `None` or an empty string
    /// means no substring constraint.
    pub contains: Option<String>,
}

/// Filter records by the given criteria, preserving input order.
pub fn filter_records(records: Vec<DnsRecord>, criteria: &FilterCriteria) -> Vec<DnsRecord> {
    // 比较前统一小写折叠，集合只折叠一次
    let exact_set: HashSet<String> = criteria
        .exact_names
        .iter()
        .map(|name| name.to_lowercase())
        .collect();
    let contains = criteria
        .contains
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(str::to_lowercase);

    records
        .into_iter()
        .filter(|record| {
            let name = record.name.to_lowercase();
            if !exact_set.is_empty() && !exact_set.contains(&name) {
                return false;
            }
            if let Some(contains) = &contains {
                if !name.contains(contains.as_str()) {
                    return false;
                }
            }
            true
        })
        .collect()
}
