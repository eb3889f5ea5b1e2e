use serde::Serialize;
use thiserror::Error;

use crate::types::CloudflareApiError;

/// Unified error type for all Cloudflare API operations.
///
/// One variant per failure mode; every transport-level problem and every
/// API-reported failure surfaces as a value of this type. All variants are
/// serializable for structured error reporting.
///
/// None of these are retried — the first failure is returned to the caller.
#[derive(Debug, Clone, Error, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ApiError {
    /// The API answered with a status outside the 2xx range.
    ///
    /// Carries the status code and the raw response body text so the
    /// failure can be diagnosed without re-running the request.
    #[error("HTTP {status} error from Cloudflare: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, TLS handshake failure, timeout).
    #[error("Network error while calling Cloudflare: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The response body was not valid JSON.
    #[error("Failed to decode Cloudflare response as JSON: {detail}; body: {snippet}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
        /// Truncated snippet of the offending payload.
        snippet: String,
    },

    /// The API reported `success: false`.
    ///
    /// Carries the error payload the API returned alongside the flag.
    #[error("Cloudflare API error: {}", render_errors(.errors))]
    Api {
        /// Errors reported by the API, possibly empty.
        errors: Vec<CloudflareApiError>,
    },
}

/// 拼接 API 错误列表用于展示
fn render_errors(errors: &[CloudflareApiError]) -> String {
    if errors.is_empty() {
        return "unknown error".to_string();
    }
    errors
        .iter()
        .map(|e| format!("{} (code {})", e.message, e.code))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http_error() {
        let e = ApiError::Http {
            status: 403,
            body: "forbidden".to_string(),
        };
        assert_eq!(e.to_string(), "HTTP 403 error from Cloudflare: forbidden");
    }

    #[test]
    fn display_network_error() {
        let e = ApiError::Network {
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Network error while calling Cloudflare: connection refused"
        );
    }

    #[test]
    fn display_parse_error() {
        let e = ApiError::Parse {
            detail: "expected value at line 1".to_string(),
            snippet: "<html>".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Failed to decode Cloudflare response as JSON: expected value at line 1; body: <html>"
        );
    }

    #[test]
    fn display_api_error_single() {
        let e = ApiError::Api {
            errors: vec![CloudflareApiError {
                code: 81044,
                message: "Record does not exist".to_string(),
            }],
        };
        assert_eq!(
            e.to_string(),
            "Cloudflare API error: Record does not exist (code 81044)"
        );
    }

    #[test]
    fn display_api_error_multiple() {
        let e = ApiError::Api {
            errors: vec![
                CloudflareApiError {
                    code: 7003,
                    message: "Could not route".to_string(),
                },
                CloudflareApiError {
                    code: 7000,
                    message: "No route for that URI".to_string(),
                },
            ],
        };
        assert_eq!(
            e.to_string(),
            "Cloudflare API error: Could not route (code 7003); No route for that URI (code 7000)"
        );
    }

    #[test]
    fn display_api_error_empty_payload() {
        let e = ApiError::Api { errors: vec![] };
        assert_eq!(e.to_string(), "Cloudflare API error: unknown error");
    }

    #[test]
    fn serialize_tagged() {
        let e = ApiError::Http {
            status: 500,
            body: "oops".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Http\""));
        assert!(json.contains("\"status\":500"));
    }
}
