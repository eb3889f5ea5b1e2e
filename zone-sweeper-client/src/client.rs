//! Cloudflare 客户端与记录拉取

use std::time::Duration;

use reqwest::Client;

use crate::error::{ApiError, Result};
use crate::types::{CloudflareResponse, CloudflareResultInfo, DnsRecord};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Cloudflare DNS Records API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_RECORDS: u32 = 100;
/// 固定 User-Agent
pub(crate) const USER_AGENT: &str = concat!("zone-sweeper/", env!("CARGO_PKG_VERSION"));

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Cloudflare DNS client.
///
/// Holds the API token and a reqwest client with fixed timeouts. All
/// operations are issued one at a time; the client performs no retries and
/// no concurrent calls.
pub struct CloudflareClient {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) base_url: String,
}

impl CloudflareClient {
    pub fn new(api_token: String) -> Self {
        Self::with_base_url(api_token, CF_API_BASE.to_string())
    }

    /// 使用自定义 API 地址（测试用）
    pub fn with_base_url(api_token: String, base_url: String) -> Self {
        Self {
            client: create_http_client(),
            api_token,
            base_url,
        }
    }

    /// List one page of DNS records in a zone.
    ///
    /// Returns the raw response envelope; callers are responsible for
    /// checking the `success` flag.
    pub async fn list_dns_records(
        &self,
        zone_id: &str,
        record_type: Option<&str>,
        page: u32,
    ) -> Result<CloudflareResponse<Vec<DnsRecord>>> {
        self.get_envelope(&records_path(zone_id, record_type, page))
            .await
    }

    /// Delete a single DNS record.
    ///
    /// A response with `success: false` is an error carrying the reported
    /// payload.
    pub async fn delete_dns_record(&self, zone_id: &str, record_id: &str) -> Result<()> {
        let envelope = self
            .delete_envelope(&format!("/zones/{zone_id}/dns_records/{record_id}"))
            .await?;
        if !envelope.success {
            return Err(ApiError::Api {
                errors: envelope.errors.unwrap_or_default(),
            });
        }
        Ok(())
    }

    /// Fetch every DNS record in a zone, page by page.
    ///
    /// Pages are requested sequentially starting at 1, 100 records per
    /// call, and accumulated in API return order. Any page with `success: false` aborts the fetch with
    /// no partial results. A missing or zero `total_pages` terminates after
    /// the current page.
    pub async fn fetch_all_records(
        &self,
        zone_id: &str,
        record_type: Option<&str>,
    ) -> Result<Vec<DnsRecord>> {
        let mut page = 1;
        let mut records = Vec::new();
        loop {
            let envelope = self.list_dns_records(zone_id, record_type, page).await?;
            if !envelope.success {
                return Err(ApiError::Api {
                    errors: envelope.errors.unwrap_or_default(),
                });
            }
            records.extend(envelope.result.unwrap_or_default());
            match next_page(page, envelope.result_info.as_ref()) {
                Some(next) => page = next,
                None => break,
            }
        }
        log::debug!("Fetched {} records from zone {zone_id}", records.len());
        Ok(records)
    }
}

/// 创建带超时配置的 HTTP Client
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to create HTTP client")
}

/// 构建记录列表请求路径
fn records_path(zone_id: &str, record_type: Option<&str>, page: u32) -> String {
    let mut path =
        format!("/zones/{zone_id}/dns_records?per_page={MAX_PAGE_SIZE_RECORDS}&page={page}");
    if let Some(record_type) = record_type {
        path.push_str(&format!("&type={}", urlencoding::encode(record_type)));
    }
    path
}

/// 计算下一页页码
///
/// `total_pages` 缺失或为 0 视为没有更多页。
pub(crate) fn next_page(current: u32, info: Option<&CloudflareResultInfo>) -> Option<u32> {
    let total_pages = info.map_or(0, |i| i.total_pages);
    if current >= total_pages {
        None
    } else {
        Some(current + 1)
    }
}
