//! # Shopify Admin SDK
//!
//! A Rust client SDK for the Shopify Admin API: an async HTTP client with
//! retry handling, plus pluggable storage for OAuth-derived sessions.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`Config`] and [`ConfigBuilder`]
//! - Validated newtypes for API credentials and domain values
//! - [`Session`] management for authenticated API calls
//! - The [`storage::SessionStorage`] contract with file-backed and
//!   in-memory implementations
//! - An async HTTP client with retry logic for rate-limited and failed
//!   requests
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_admin::{Config, ApiKey, ApiSecretKey};
//!
//! let config = Config::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("your-api-secret").unwrap())
//!     .scopes("read_products,write_orders".parse().unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Sessions and Storage
//!
//! Sessions represent authorization state for one authenticated shop. They
//! can be either offline (app-level) or online (user-specific):
//!
//! ```rust
//! use shopify_admin::{Session, ShopDomain, AuthScopes};
//! use shopify_admin::storage::{MemorySessionStorage, SessionStorage};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let shop = ShopDomain::new("my-store").unwrap();
//! let session = Session::new(
//!     Session::generate_offline_id(&shop),
//!     shop,
//!     Some("access-token".to_string()),
//!     "read_products".parse().unwrap(),
//!     false,
//!     None,
//! );
//!
//! // Persist through any SessionStorage backend
//! let storage = MemorySessionStorage::new();
//! storage.store_session(&session).await.unwrap();
//! let loaded = storage.load_session(session.id()).await.unwrap();
//! assert_eq!(loaded, Some(session));
//! # }
//! ```
//!
//! Applications that need sessions to survive restarts use
//! [`storage::FileSessionStorage`], which keeps one JSON file per session in
//! a directory, or implement [`storage::SessionStorage`] against their own
//! backend.
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use shopify_admin::clients::{DataType, HttpClient, HttpRequest, HttpMethod};
//! use serde_json::json;
//!
//! let client = HttpClient::new("/admin/api/2025-01", &session, None);
//!
//! // Convenience verbs for simple calls
//! let response = client.get("products.json").await?;
//!
//! // The builder for full control, including retries
//! let request = HttpRequest::builder(HttpMethod::Post, "products.json")
//!     .body(json!({"product": {"title": "New Product"}}))
//!     .body_type(DataType::Json)
//!     .tries(3)
//!     .build()?;
//! let response = client.request(request).await?;
//!
//! // HTTP error statuses are responses, not errors
//! if !response.is_ok() {
//!     eprintln!("API returned {}", response.code);
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Errors mean failure**: HTTP error statuses come back as ordinary
//!   responses; `Err` is reserved for invalid requests and transport failures

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod storage;

// Re-export public types at crate root for convenience
pub use auth::{AuthScopes, Session};
pub use config::{ApiKey, ApiSecretKey, Config, ConfigBuilder, HostUrl, ShopDomain};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError,
};

// Re-export session storage types
pub use storage::{FileSessionStorage, MemorySessionStorage, SessionStorage, StorageError};
