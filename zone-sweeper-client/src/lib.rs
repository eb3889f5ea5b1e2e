//! # zone-sweeper-client
//!
//! Cloudflare v4 API client for bulk DNS record cleanup.
//!
//! The crate covers exactly the surface the `zone-sweeper` CLI needs:
//! fetching every DNS record in a zone (page by page), narrowing the set
//! with case-insensitive name filters, and deleting records one at a time.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zone_sweeper_client::{CloudflareClient, FilterCriteria, filter_records};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Create a client from an API token
//!     let client = CloudflareClient::new("your-token".to_string());
//!
//!     // 2. Fetch all records in the zone (optionally filtered by type)
//!     let records = client.fetch_all_records("your-zone-id", Some("TXT")).await?;
//!
//!     // 3. Narrow the set down client-side
//!     let criteria = FilterCriteria {
//!         contains: Some("staging".to_string()),
//!         ..FilterCriteria::default()
//!     };
//!     for record in filter_records(records, &criteria) {
//!         println!("{} {} -> {}", record.record_type, record.name, record.content);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). The enum carries
//! one variant per failure mode:
//!
//! - [`ApiError::Http`] — the API answered with a non-2xx status
//! - [`ApiError::Network`] — the request never completed (DNS, TLS, connect)
//! - [`ApiError::Parse`] — the response body was not valid JSON
//! - [`ApiError::Api`] — the API reported `success: false` with an error payload
//!
//! There are no retries: every error surfaces to the caller on the first
//! occurrence.

mod client;
mod error;
mod filter;
mod http;
mod types;

// Re-export error types
pub use error::{ApiError, Result};

// Re-export the client
pub use client::CloudflareClient;

// Re-export filtering
pub use filter::{FilterCriteria, filter_records};

// Re-export API types
pub use types::{CloudflareApiError, CloudflareResponse, CloudflareResultInfo, DnsRecord};
