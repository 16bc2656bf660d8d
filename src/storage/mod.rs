//! Pluggable session persistence.
//!
//! This module provides the [`SessionStorage`] capability trait and the two
//! backends shipped with the SDK:
//!
//! - [`FileSessionStorage`]: one JSON file per session in a directory
//! - [`MemorySessionStorage`]: an in-process map, useful in tests and
//!   short-lived tools
//!
//! Backends are keyed by the session id. No concurrency guarantee is made
//! between load/store/delete from different actors; callers must not assume
//! atomic read-modify-write across operations.
//!
//! # Example
//!
//! ```rust,no_run
//! use shopify_admin::storage::{FileSessionStorage, SessionStorage};
//! use shopify_admin::{Session, ShopDomain, AuthScopes};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = FileSessionStorage::new("/var/lib/my-app/sessions")?;
//!
//! let shop = ShopDomain::new("my-store")?;
//! let session = Session::new(
//!     Session::generate_offline_id(&shop),
//!     shop,
//!     Some("access-token".to_string()),
//!     AuthScopes::new(),
//!     false,
//!     None,
//! );
//!
//! storage.store_session(&session).await?;
//! let loaded = storage.load_session(session.id()).await?;
//! assert_eq!(loaded.as_ref(), Some(&session));
//! # Ok(())
//! # }
//! ```

mod file;
mod memory;

pub use file::FileSessionStorage;
pub use memory::MemorySessionStorage;

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::Session;

/// Errors that can occur while persisting or loading sessions.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A filesystem operation failed.
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A session could not be serialized for storage.
    #[error("Failed to serialize session '{id}'.")]
    Serialization {
        /// The id of the session being stored.
        id: String,
        /// The underlying serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// A persisted record exists but could not be parsed back into a session.
    ///
    /// Corrupt records are rejected rather than silently treated as absent,
    /// so callers can distinguish "no session" from "damaged session".
    #[error("Corrupt session record for '{id}'.")]
    Deserialization {
        /// The id of the session being loaded.
        id: String,
        /// The underlying parser error.
        #[source]
        source: serde_json::Error,
    },
}

/// Capability contract for session persistence backends.
///
/// Implementations store one [`Session`] per session id. The trait is
/// object-safe, so applications can hold an `Arc<dyn SessionStorage>` and
/// swap backends without changing call sites.
///
/// # Contract
///
/// - `load_session` of an unknown id is `Ok(None)`, never an error.
/// - `store_session` creates or overwrites the record for the session's id.
/// - `delete_session` of an absent record is `Ok(false)`, not an error.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Loads the session stored under `id`, or `None` if no record exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the record exists but cannot be read
    /// or parsed.
    async fn load_session(&self, id: &str) -> Result<Option<Session>, StorageError>;

    /// Creates or overwrites the record for `session.id()`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the session cannot be serialized or
    /// the write fails.
    async fn store_session(&self, session: &Session) -> Result<(), StorageError>;

    /// Removes the record stored under `id`.
    ///
    /// Returns `true` if an existing record was removed and `false` if no
    /// record existed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if an existing record could not be removed.
    async fn delete_session(&self, id: &str) -> Result<bool, StorageError>;
}
