//! File-backed session storage.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::auth::Session;
use crate::storage::{SessionStorage, StorageError};

/// Session storage that keeps one JSON file per session in a directory.
///
/// The session id determines the file name. Ids are percent-encoded before
/// use, so ids containing path separators or other characters unsafe in file
/// names cannot escape the storage directory and still round-trip losslessly.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a concurrent load never observes a partially written
/// record. Beyond that, no isolation is provided between concurrent readers
/// and writers.
///
/// # Example
///
/// ```rust,no_run
/// use shopify_admin::storage::FileSessionStorage;
///
/// // The directory (and missing parents) is created on construction.
/// let storage = FileSessionStorage::new("/var/lib/my-app/sessions").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    dir: PathBuf,
}

impl FileSessionStorage {
    /// Creates a storage backend rooted at `dir`.
    ///
    /// The directory and any missing parent segments are created eagerly
    /// and synchronously, before any other operation.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Returns the directory this backend stores sessions in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn session_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", urlencoding::encode(id)))
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn load_session(&self, id: &str) -> Result<Option<Session>, StorageError> {
        let path = self.session_path(id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(session) => Ok(Some(session)),
            Err(source) => {
                tracing::warn!("Rejecting corrupt session record for '{id}'");
                Err(StorageError::Deserialization {
                    id: id.to_string(),
                    source,
                })
            }
        }
    }

    async fn store_session(&self, session: &Session) -> Result<(), StorageError> {
        let path = self.session_path(session.id());
        let json =
            serde_json::to_vec_pretty(session).map_err(|source| StorageError::Serialization {
                id: session.id().to_string(),
                source,
            })?;

        // Write-to-temp-then-rename keeps concurrent loads from seeing a
        // torn record.
        let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &path).await?;

        tracing::debug!("Stored session '{}'", session.id());
        Ok(())
    }

    async fn delete_session(&self, id: &str) -> Result<bool, StorageError> {
        match tokio::fs::remove_file(self.session_path(id)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
