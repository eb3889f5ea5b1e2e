//! Cloudflare API 类型定义

use serde::{Deserialize, Serialize};

/// Cloudflare API 通用响应
///
/// Every endpoint wraps its payload in this envelope. Fields default when
/// absent so that a degenerate body still deserializes; a missing `success`
/// flag reads as `false` and is treated as an API-reported failure.
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<CloudflareApiError>>,
    #[serde(default)]
    pub result_info: Option<CloudflareResultInfo>,
}

/// API 返回的单条错误
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudflareApiError {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// 分页元数据
#[derive(Debug, Clone, Deserialize)]
pub struct CloudflareResultInfo {
    #[serde(default)]
    pub page: u32,
    /// 缺失或为 0 时视为没有更多页
    #[serde(default)]
    pub total_pages: u32,
}

/// Cloudflare DNS Record 结构（响应）
///
/// Records are immutable once fetched; the only state change they undergo
/// is remote deletion. An empty `id` marks a record the API returned
/// without an identifier — the deleter skips those.
#[derive(Debug, Clone, Deserialize)]
pub struct DnsRecord {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub record_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}
