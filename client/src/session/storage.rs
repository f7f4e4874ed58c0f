//! Durable session storage.
//!
//! The storage trait is synchronous by design: `SessionEstablished` and
//! `Logout` must update in-memory state and durable storage together, with
//! no partially-committed session observable in between.

use crate::session::state::PersistedSession;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from durable session storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session document could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable storage for the session document.
pub trait SessionStorage: Send + Sync {
    /// Read the persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be read.
    fn load(&self) -> Result<Option<PersistedSession>, StorageError>;

    /// Persist the session document, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the document cannot be written.
    fn save(&self, session: &PersistedSession) -> Result<(), StorageError>;

    /// Remove the persisted session.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be cleared.
    fn clear(&self) -> Result<(), StorageError>;
}

/// File-backed session storage: one JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Create storage at the given path. The file is created on the first
    /// `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // A corrupt document is indistinguishable from no session;
                // restore falls back to guest either way.
                tracing::warn!(error = %e, path = %self.path.display(),
                    "Discarding unreadable session document");
                Ok(None)
            },
        }
    }

    fn save(&self, session: &PersistedSession) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(session)?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
