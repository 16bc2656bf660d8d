//! Session management for Admin API authentication.
//!
//! This module provides the [`Session`] type representing the unit of
//! authorization state for one authenticated shop.

use crate::auth::AuthScopes;
use crate::config::ShopDomain;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated session for Admin API calls.
///
/// Sessions hold the authentication state needed to make API requests on
/// behalf of a shop. They can be either online (user-specific, expiring) or
/// offline (app-level, long-lived). A session is created during OAuth
/// callback handling, persisted through a
/// [`SessionStorage`](crate::storage::SessionStorage) backend, later loaded
/// by id to authorize API calls, and deleted on logout or revocation.
///
/// The session id is the storage key and is immutable after construction;
/// every other field is plain data.
///
/// # Example
///
/// ```rust
/// use shopify_admin::{Session, ShopDomain, AuthScopes};
///
/// let shop = ShopDomain::new("my-store").unwrap();
/// let session = Session::new(
///     Session::generate_offline_id(&shop),
///     shop,
///     Some("access-token".to_string()),
///     "read_products".parse().unwrap(),
///     false, // offline session
///     None,  // no expiration
/// );
///
/// assert_eq!(session.id(), "offline_my-store.myshopify.com");
/// assert!(session.is_active());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this session; also the storage key.
    id: String,

    /// The shop this session is for.
    pub shop: ShopDomain,

    /// The OAuth state token, present while an authorization flow is in flight.
    pub state: Option<String>,

    /// The OAuth scopes granted to this session.
    pub scopes: AuthScopes,

    /// Whether this is an online (user-specific) session.
    pub is_online: bool,

    /// When this session expires. Absent for offline sessions.
    pub expires: Option<DateTime<Utc>>,

    /// The access token for API authentication. Absent until the OAuth
    /// flow completes.
    pub access_token: Option<String>,
}

impl Session {
    /// Creates a new session with the specified parameters.
    #[must_use]
    pub const fn new(
        id: String,
        shop: ShopDomain,
        access_token: Option<String>,
        scopes: AuthScopes,
        is_online: bool,
        expires: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            shop,
            state: None,
            scopes,
            is_online,
            expires,
            access_token,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the canonical id for a shop's offline session.
    ///
    /// A shop has at most one offline session, so its id is derived from
    /// the shop domain alone.
    #[must_use]
    pub fn generate_offline_id(shop: &ShopDomain) -> String {
        format!("offline_{}", shop.as_ref())
    }

    /// Returns `true` if this session has expired.
    ///
    /// Sessions without an expiration time are considered never expired.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires.is_some_and(|expires| Utc::now() > expires)
    }

    /// Returns `true` if this session is active: it carries an access token
    /// and has not expired.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty()) && !self.expired()
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
