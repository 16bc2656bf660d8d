//! In-memory session storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::auth::Session;
use crate::storage::{SessionStorage, StorageError};

/// Session storage backed by an in-process map.
///
/// Sessions are lost when the process exits. This backend is intended for
/// tests and short-lived tools; production applications should use
/// [`FileSessionStorage`](crate::storage::FileSessionStorage) or their own
/// [`SessionStorage`] implementation.
///
/// # Example
///
/// ```rust
/// use shopify_admin::storage::{MemorySessionStorage, SessionStorage};
/// use shopify_admin::{Session, ShopDomain, AuthScopes};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let storage = MemorySessionStorage::new();
/// let session = Session::new(
///     "session-id".to_string(),
///     ShopDomain::new("my-store").unwrap(),
///     Some("token".to_string()),
///     AuthScopes::new(),
///     false,
///     None,
/// );
///
/// storage.store_session(&session).await.unwrap();
/// assert!(storage.load_session("session-id").await.unwrap().is_some());
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    sessions: RwLock<HashMap<String, Session>>,
}

impl MemorySessionStorage {
    /// Creates an empty storage backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn load_session(&self, id: &str) -> Result<Option<Session>, StorageError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn store_session(&self, session: &Session) -> Result<(), StorageError> {
        self.sessions
            .write()
            .await
            .insert(session.id().to_string(), session.clone());
        Ok(())
    }

    async fn delete_session(&self, id: &str) -> Result<bool, StorageError> {
        Ok(self.sessions.write().await.remove(id).is_some())
    }
}
