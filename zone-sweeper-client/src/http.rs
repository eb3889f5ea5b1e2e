//! Cloudflare HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::client::CloudflareClient;
use crate::error::{ApiError, Result};
use crate::types::CloudflareResponse;

/// 日志与解析错误片段的最大长度（字节）
const TRUNCATE_LIMIT: usize = 256;

impl CloudflareClient {
    /// 执行 GET 请求，返回响应信封
    pub(crate) async fn get_envelope<T: DeserializeOwned + Default>(
        &self,
        path_and_query: &str,
    ) -> Result<CloudflareResponse<T>> {
        let url = format!("{}{}", self.base_url, path_and_query);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .send()
            .await
            .map_err(|e| ApiError::Network {
                detail: e.to_string(),
            })?;

        self.read_envelope(response).await
    }

    /// 执行 DELETE 请求，返回响应信封
    pub(crate) async fn delete_envelope(
        &self,
        path: &str,
    ) -> Result<CloudflareResponse<serde_json::Value>> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("DELETE {url}");

        let response = self
            .client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .send()
            .await
            .map_err(|e| ApiError::Network {
                detail: e.to_string(),
            })?;

        self.read_envelope(response).await
    }

    /// 读取响应体并解析为信封
    ///
    /// 非 2xx 状态码携带状态与原始响应体直接报错；2xx 但不是合法 JSON
    /// 时报解析错误并附带截断片段。
    async fn read_envelope<T: DeserializeOwned + Default>(
        &self,
        response: reqwest::Response,
    ) -> Result<CloudflareResponse<T>> {
        let status = response.status();
        log::debug!("Response Status: {status}");

        let body = response.text().await.map_err(|e| ApiError::Network {
            detail: format!("读取响应失败: {e}"),
        })?;
        log::debug!("Response Body: {}", truncate_body(&body));

        if !status.is_success() {
            log::error!("HTTP {status}: {}", truncate_body(&body));
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!("JSON 解析失败: {e}");
            ApiError::Parse {
                detail: e.to_string(),
                snippet: truncate_body(&body),
            }
        })
    }
}

/// 按字符边界截断响应体，避免日志里出现整段 payload
fn truncate_body(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let mut end = TRUNCATE_LIMIT;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_body("{\"success\":true}"), "{\"success\":true}");
    }

    #[test]
    fn long_body_truncated_with_length() {
        let body = "x".repeat(TRUNCATE_LIMIT + 50);
        let result = truncate_body(&body);
        assert!(result.starts_with(&"x".repeat(TRUNCATE_LIMIT)));
        assert!(result.ends_with(&format!("[truncated, total {} bytes]", TRUNCATE_LIMIT + 50)));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "响".repeat(100); // 每个字符 3 字节
        let result = truncate_body(&body);
        assert!(result.contains("... [truncated, total 300 bytes]"));
    }
}
