//! HTTP client for Admin API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Admin API with automatic retry handling.

use std::collections::HashMap;
use std::time::Duration;

use crate::auth::Session;
use crate::clients::errors::HttpError;
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::Config;

/// Status codes that trigger a retry when attempts remain.
pub const RETRIABLE_STATUS_CODES: [u16; 2] = [429, 500];

/// Fixed retry wait time in seconds, used when the response carries no
/// `Retry-After` header.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

const USER_AGENT_HEADER: &str = "User-Agent";

/// HTTP client for making requests to the Admin API.
///
/// The client handles:
/// - Base URI construction from the session's shop domain, or from a
///   configured host override
/// - Default headers including `User-Agent` and the access token
/// - Body serialization with `Content-Type`/`Content-Length` injection
/// - Automatic retry of 429 and 500 responses
///
/// Every request owns its round trip end-to-end; no mutable state is shared
/// between calls, and the client is `Send + Sync`.
///
/// # Retry Behavior
///
/// A request is attempted up to `tries` times (default 1, i.e. no retries).
/// A 429 or 500 response with attempts remaining sleeps for the `Retry-After`
/// header value, or 1 second when absent, then reissues the same request.
/// Every other response is returned as-is, including the final 429/500 once
/// tries are exhausted; only transport-level failures and invalid requests
/// produce an `Err`.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_admin::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new("/admin/api/2025-01", &session, None);
///
/// let response = client.get("products.json").await?;
/// if response.is_ok() {
///     println!("Products: {}", response.body);
/// }
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    /// Base path (e.g., "/admin/api/2025-01").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given session.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g., "/admin/api/2025-01")
    /// * `session` - The session providing shop domain and access token
    /// * `config` - Optional configuration for the host override,
    ///   `user_agent_prefix`, and request timeout
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(base_path: impl Into<String>, session: &Session, config: Option<&Config>) -> Self {
        let base_path = base_path.into();

        // Determine base URI - use the host override if configured,
        // otherwise the session's shop domain
        let host = config.and_then(Config::host);
        let base_uri = host.map_or_else(
            || format!("https://{}", session.shop.as_ref()),
            |host| format!("{}://{}", host.scheme(), host.authority()),
        );

        // Build User-Agent header
        let user_agent_prefix = config
            .and_then(Config::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify Admin API Client v{SDK_VERSION} | Rust {rust_version}"
        );

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert(USER_AGENT_HEADER.to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Keep addressing the shop when requests are routed through an
        // override host (proxy scenario)
        if host.is_some() {
            default_headers.insert("Host".to_string(), session.shop.as_ref().to_string());
        }

        if let Some(token) = session.access_token.as_deref().filter(|t| !t.is_empty()) {
            default_headers.insert("X-Shopify-Access-Token".to_string(), token.to_string());
        }

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.and_then(Config::request_timeout) {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            base_path,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure.
    pub async fn get(&self, path: impl Into<String>) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.request(request).await
    }

    /// Sends a DELETE request to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure.
    pub async fn delete(&self, path: impl Into<String>) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.request(request).await
    }

    /// Sends a POST request with `body` encoded as `data_type`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be encoded or on transport
    /// failure.
    pub async fn post(
        &self,
        path: impl Into<String>,
        body: impl Into<serde_json::Value>,
        data_type: DataType,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .body_type(data_type)
            .build()?;
        self.request(request).await
    }

    /// Sends a PUT request with `body` encoded as `data_type`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the body cannot be encoded or on transport
    /// failure.
    pub async fn put(
        &self,
        path: impl Into<String>,
        body: impl Into<serde_json::Value>,
        data_type: DataType,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .body(body)
            .body_type(data_type)
            .build()?;
        self.request(request).await
    }

    /// Sends an HTTP request to the Admin API.
    ///
    /// All the convenience verbs converge on this method. It handles request
    /// validation, URL construction, header merging, body serialization,
    /// response decoding, and the retry loop for 429 and 500 responses.
    ///
    /// HTTP error statuses are not errors: the response is returned with its
    /// status code for the caller to inspect, including a final 429/500 once
    /// `request.tries` attempts are exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The transport fails below the HTTP layer (`Network`); this class
    ///   of failure is never retried
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let body = request.serialized_body()?;
        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);
        let headers = self.merge_headers(&request, body.as_deref());
        let max_tries = request.tries.max(1);

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }

            if let Some(body) = &body {
                req_builder = req_builder.body(body.clone());
            }

            tracing::debug!(
                "Sending {} request to {} (attempt {attempt} of {max_tries})",
                request.http_method,
                request.path
            );

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();
            let response = HttpResponse::from_raw(code, res_headers, &body_text);

            if let Some(reason) = response.deprecation_reason() {
                tracing::warn!(
                    "Deprecated request to Admin API at {}, received reason: {}",
                    request.path,
                    reason
                );
            }

            // Anything non-retriable is handed back as-is, and so is the
            // last response once tries are exhausted
            if !RETRIABLE_STATUS_CODES.contains(&code) || attempt >= max_tries {
                return Ok(response);
            }

            let delay = response
                .retry_request_after
                .map_or(Duration::from_secs(RETRY_WAIT_TIME), Duration::from_secs_f64);
            tracing::warn!(
                "Retrying request to {} after status {code} (attempt {attempt} of {max_tries}, waiting {:?})",
                request.path,
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Builds the final header set for a request: client defaults, then
    /// `Content-Type`/`Content-Length` when a body is present, then caller
    /// headers on top (last-write-wins per header name). A caller-supplied
    /// `User-Agent` is joined with the library value instead of replacing it.
    fn merge_headers(&self, request: &HttpRequest, body: Option<&str>) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();

        if let Some(body) = body {
            if let Some(body_type) = &request.body_type {
                Self::insert_header(
                    &mut headers,
                    "Content-Type",
                    body_type.as_content_type().to_string(),
                );
            }
            Self::insert_header(&mut headers, "Content-Length", body.len().to_string());
        }

        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                if key.eq_ignore_ascii_case(USER_AGENT_HEADER) {
                    let library_agent = self
                        .default_headers
                        .get(USER_AGENT_HEADER)
                        .cloned()
                        .unwrap_or_default();
                    Self::insert_header(
                        &mut headers,
                        USER_AGENT_HEADER,
                        format!("{value} | {library_agent}"),
                    );
                } else {
                    Self::insert_header(&mut headers, key, value.clone());
                }
            }
        }

        headers
    }

    /// Inserts a header with last-write-wins semantics, matching existing
    /// names case-insensitively.
    fn insert_header(headers: &mut HashMap<String, String>, key: &str, value: String) {
        headers.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
        headers.insert(key.to_string(), value);
    }

    /// Parses response headers into a `HashMap`, case-folding names and
    /// preserving repeated headers as an ordered list.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthScopes;
    use crate::config::{ApiKey, ApiSecretKey, HostUrl, ShopDomain};

    fn create_test_session() -> Session {
        Session::new(
            "test-session".to_string(),
            ShopDomain::new("test-shop").unwrap(),
            Some("test-access-token".to_string()),
            AuthScopes::new(),
            false,
            None,
        )
    }

    fn create_test_config() -> crate::config::ConfigBuilder {
        Config::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .api_secret_key(ApiSecretKey::new("test-secret").unwrap())
    }

    #[test]
    fn test_client_construction_with_session() {
        let session = create_test_session();
        let client = HttpClient::new("/admin/api/2025-01", &session, None);

        assert_eq!(client.base_uri(), "https://test-shop.myshopify.com");
        assert_eq!(client.base_path(), "/admin/api/2025-01");
    }

    #[test]
    fn test_host_override_keeps_scheme_and_port() {
        let session = create_test_session();
        let config = create_test_config()
            .host(HostUrl::new("http://127.0.0.1:8080").unwrap())
            .build()
            .unwrap();

        let client = HttpClient::new("/admin/api/2025-01", &session, Some(&config));

        assert_eq!(client.base_uri(), "http://127.0.0.1:8080");
        // Host header keeps addressing the shop
        assert_eq!(
            client.default_headers().get("Host"),
            Some(&"test-shop.myshopify.com".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let session = create_test_session();
        let client = HttpClient::new("/admin/api/2025-01", &session, None);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Shopify Admin API Client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_configured_prefix() {
        let session = create_test_session();
        let config = create_test_config()
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new("/admin/api/2025-01", &session, Some(&config));

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Shopify Admin API Client"));
    }

    #[test]
    fn test_access_token_header_injection() {
        let session = create_test_session();
        let client = HttpClient::new("/admin/api/2025-01", &session, None);

        assert_eq!(
            client.default_headers().get("X-Shopify-Access-Token"),
            Some(&"test-access-token".to_string())
        );
    }

    #[test]
    fn test_no_access_token_header_when_absent() {
        let session = Session::new(
            "test-session".to_string(),
            ShopDomain::new("test-shop").unwrap(),
            None,
            AuthScopes::new(),
            false,
            None,
        );
        let client = HttpClient::new("/admin/api/2025-01", &session, None);

        assert!(client
            .default_headers()
            .get("X-Shopify-Access-Token")
            .is_none());
    }

    #[test]
    fn test_merge_headers_injects_content_headers_for_bodies() {
        let session = create_test_session();
        let client = HttpClient::new("/admin/api/2025-01", &session, None);

        let request = HttpRequest::builder(HttpMethod::Post, "products.json")
            .body(serde_json::json!({"product": {}}))
            .body_type(DataType::Json)
            .build()
            .unwrap();
        let body = request.serialized_body().unwrap().unwrap();

        let headers = client.merge_headers(&request, Some(&body));
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(headers.get("Content-Length"), Some(&body.len().to_string()));
    }

    #[test]
    fn test_merge_headers_caller_wins_on_collision() {
        let session = create_test_session();
        let client = HttpClient::new("/admin/api/2025-01", &session, None);

        let request = HttpRequest::builder(HttpMethod::Post, "products.json")
            .body(serde_json::json!({"product": {}}))
            .body_type(DataType::Json)
            .header("content-type", "application/json; charset=utf-8")
            .build()
            .unwrap();
        let body = request.serialized_body().unwrap().unwrap();

        let headers = client.merge_headers(&request, Some(&body));
        // Last-write-wins, matched case-insensitively: exactly one entry
        let matches: Vec<_> = headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].1, "application/json; charset=utf-8");
    }

    #[test]
    fn test_merge_headers_joins_caller_user_agent() {
        let session = create_test_session();
        let client = HttpClient::new("/admin/api/2025-01", &session, None);
        let library_agent = client.default_headers().get("User-Agent").unwrap().clone();

        let request = HttpRequest::builder(HttpMethod::Get, "products.json")
            .header("User-Agent", "CallerAgent/2.0")
            .build()
            .unwrap();

        let headers = client.merge_headers(&request, None);
        assert_eq!(
            headers.get("User-Agent"),
            Some(&format!("CallerAgent/2.0 | {library_agent}"))
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
