//! Authentication types for the Shopify Admin SDK.
//!
//! This module provides the types describing authorization state for
//! Admin API calls.
//!
//! # Overview
//!
//! - [`AuthScopes`]: A set of OAuth scopes with implied scope handling
//! - [`Session`]: The unit of authorization state for one authenticated shop
//!
//! # Session Types
//!
//! Two kinds of session exist:
//!
//! - **Offline sessions**: App-level tokens that don't expire and persist
//!   across user sessions. Used for background tasks and webhooks.
//! - **Online sessions**: User-specific tokens that expire and are tied to a
//!   single browser-facing actor.
//!
//! # Example
//!
//! ```rust
//! use shopify_admin::{Session, ShopDomain, AuthScopes};
//!
//! let shop = ShopDomain::new("my-store").unwrap();
//! let offline_session = Session::new(
//!     Session::generate_offline_id(&shop),
//!     shop,
//!     Some("access-token".to_string()),
//!     "read_products".parse().unwrap(),
//!     false,
//!     None,
//! );
//!
//! // Offline sessions don't expire
//! assert!(!offline_session.expired());
//! ```

mod scopes;
pub mod session;

pub use scopes::AuthScopes;
pub use session::Session;
