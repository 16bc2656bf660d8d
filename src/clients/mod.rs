//! HTTP client types for Admin API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to the Admin API. It handles request/response
//! processing, body serialization, and retry logic.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A decoded response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies (JSON, URL-encoded)
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::clients::{DataType, HttpClient};
//! use serde_json::json;
//!
//! let client = HttpClient::new("/admin/api/2025-01", &session, None);
//!
//! let response = client.get("products.json").await?;
//! println!("status {}: {}", response.code, response.body);
//!
//! let response = client
//!     .post("products.json", json!({"product": {"title": "Tea"}}), DataType::Json)
//!     .await?;
//! ```
//!
//! # Retry Behavior
//!
//! The client implements automatic retry logic for transient failures:
//!
//! - **429 (Rate Limited)** and **500 (Server Error)**: retried while
//!   attempts remain, sleeping for the `Retry-After` header value or 1
//!   second when absent
//! - **Other statuses**: returned immediately without retry
//! - **Transport failures**: surfaced immediately as
//!   [`HttpError::Network`], never retried
//!
//! The default `tries` is 1, meaning no automatic retries. Configure via
//! [`HttpRequest::builder`] with `.tries(n)` to enable them. Exhausting
//! retries is not an error either: the caller receives the last response
//! and inspects its status code.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, RETRIABLE_STATUS_CODES, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
