//! HTTP-specific error types.
//!
//! Only two classes of failure surface as `Err` from the HTTP client:
//!
//! - [`InvalidHttpRequestError`]: the request failed validation before it
//!   was sent
//! - [`HttpError::Network`]: the transport itself failed (connection, DNS,
//!   timeout below the HTTP layer)
//!
//! HTTP-level error statuses (4xx/5xx) are NOT errors. They come back as
//! ordinary [`HttpResponse`](crate::clients::HttpResponse) values, including
//! a final 429/500 once retries are exhausted, and it is the caller's
//! responsibility to inspect `response.code`.
//!
//! # Example
//!
//! ```rust,ignore
//! match client.request(request).await {
//!     Ok(response) if response.is_ok() => println!("Success: {}", response.body),
//!     Ok(response) => println!("API returned status {}", response.code),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The body cannot be encoded with the declared content type.
    ///
    /// URL-encoded bodies must be a string or an object of key/value pairs.
    #[error("Cannot encode the request body as {data_type} data.")]
    UnsupportedBody {
        /// The declared content type.
        data_type: String,
    },
}

/// Unified error type for HTTP operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed; nothing was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The transport failed below the HTTP layer. This class of failure is
    /// never retried.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
