//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type, the uniform return shape
//! for all requests made through the HTTP client.

use std::collections::HashMap;

/// An HTTP response from the Admin API.
///
/// The status code and headers are captured verbatim, with header names
/// case-folded to lower-case and repeated headers preserved as an ordered
/// list of values. The body is decoded according to the response's declared
/// content type.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name. Headers may have
    /// multiple values.
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded response body: a JSON structure, a URL-encoded mapping
    /// rendered as an object of strings, or an empty object.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from the `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates an `HttpResponse` from an already-decoded body.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Creates an `HttpResponse` from the raw body text, decoding it
    /// according to the response's `Content-Type` header.
    ///
    /// - JSON content types decode into a structured value; a JSON body
    ///   that fails to parse on a 5xx response is preserved under a
    ///   `raw_body` key so server error pages aren't lost
    /// - URL-encoded content types decode into an object of string values
    /// - anything else, and an empty body, decodes to an empty object
    #[must_use]
    pub fn from_raw(code: u16, headers: HashMap<String, Vec<String>>, body_text: &str) -> Self {
        let body = Self::decode_body(code, &headers, body_text);
        Self::new(code, headers, body)
    }

    fn decode_body(
        code: u16,
        headers: &HashMap<String, Vec<String>>,
        body_text: &str,
    ) -> serde_json::Value {
        if body_text.is_empty() {
            return serde_json::json!({});
        }

        let content_type = headers
            .get("content-type")
            .and_then(|values| values.first())
            .map(|value| {
                value
                    .split(';')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_lowercase()
            })
            .unwrap_or_default();

        if content_type.contains("json") {
            return serde_json::from_str(body_text).unwrap_or_else(|_| {
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            });
        }

        if content_type.contains("x-www-form-urlencoded") {
            return Self::decode_form_body(body_text);
        }

        serde_json::json!({})
    }

    fn decode_form_body(body_text: &str) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for pair in body_text.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or_default();
            if key.is_empty() {
                continue;
            }
            let value = parts.next().unwrap_or_default();
            let key = urlencoding::decode(key).map_or_else(|_| key.to_string(), String::from);
            let value =
                urlencoding::decode(value).map_or_else(|_| value.to_string(), String::from);
            map.insert(key, serde_json::Value::String(value));
        }
        serde_json::Value::Object(map)
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This id is useful for debugging and should be included when
    /// reporting API errors.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    ///
    /// When present, the requested endpoint is deprecated and the caller
    /// should migrate.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.headers
            .get("x-shopify-api-deprecated-reason")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
