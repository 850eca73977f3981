//! Snapshot persistence: the [`SnapshotBackend`] contract plus file and
//! in-memory backends.
//!
//! [`MemoryBackend`] is a first-class backend for tests and ephemeral
//! sessions; [`FileBackend`] is the durable stand-in for the browser's
//! key-value slot. Both have identical semantics: one opaque blob, last
//! write wins, no cross-process coordination.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::database::Database;
use crate::error::StoreError;

/// The persistence contract for the snapshot blob.
///
/// The trait is synchronous; the access layer's only suspension point is its
/// latency hook, never the backend.
pub trait SnapshotBackend: Send {
    /// Reads the stored blob, or `None` when nothing has been written yet.
    fn read(&self) -> Result<Option<String>, StoreError>;

    /// Writes (replaces) the stored blob.
    fn write(&self, blob: &str) -> Result<(), StoreError>;
}

/// File-backed snapshot storage: one blob in one file.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileBackend { path: path.into() }
    }
}

impl SnapshotBackend for FileBackend {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, blob: &str) -> Result<(), StoreError> {
        fs::write(&self.path, blob)?;
        Ok(())
    }
}

/// In-memory snapshot storage. Clones share the same slot, so a test can
/// hand one clone to the service and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    /// A backend pre-loaded with an existing blob.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        MemoryBackend {
            slot: Arc::new(Mutex::new(Some(blob.into()))),
        }
    }

    /// The currently stored blob, if any.
    pub fn blob(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SnapshotBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.lock().clone())
    }

    fn write(&self, blob: &str) -> Result<(), StoreError> {
        *self.lock() = Some(blob.to_string());
        Ok(())
    }
}

/// Decodes an already-read snapshot blob, falling back to the seed dataset
/// when it is absent or unparseable. Fallbacks are logged; they are a
/// recoverable condition, not an error.
pub fn decode_or_seed(blob: Option<String>) -> Database {
    match blob {
        Some(blob) => match Database::from_blob(&blob) {
            Ok(db) => db,
            Err(err) => {
                tracing::warn!(error = %err, "snapshot unparseable, falling back to seed dataset");
                Database::seed()
            }
        },
        None => Database::seed(),
    }
}

/// Loads the database from the backend, falling back to the seed dataset
/// when the blob is absent, unreadable or unparseable.
pub fn load_or_seed(backend: &dyn SnapshotBackend) -> Database {
    match backend.read() {
        Ok(blob) => decode_or_seed(blob),
        Err(err) => {
            tracing::warn!(error = %err, "snapshot read failed, falling back to seed dataset");
            Database::seed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_clones_share_one_slot() {
        let a = MemoryBackend::new();
        let b = a.clone();
        a.write("blob-1").unwrap();
        assert_eq!(b.read().unwrap().as_deref(), Some("blob-1"));
        b.write("blob-2").unwrap();
        assert_eq!(a.blob().as_deref(), Some("blob-2"));
    }

    #[test]
    fn file_backend_missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("db.json"));
        assert!(backend.read().unwrap().is_none());
    }

    #[test]
    fn file_backend_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("db.json"));
        let blob = Database::seed().to_blob().unwrap();
        backend.write(&blob).unwrap();
        assert_eq!(backend.read().unwrap().as_deref(), Some(blob.as_str()));
    }

    #[test]
    fn load_or_seed_falls_back_on_absent_blob() {
        let backend = MemoryBackend::new();
        assert_eq!(load_or_seed(&backend), Database::seed());
    }

    #[test]
    fn decode_or_seed_falls_back_without_a_blob() {
        assert_eq!(decode_or_seed(None), Database::seed());
        assert_eq!(
            decode_or_seed(Some("definitely not json".into())),
            Database::seed()
        );
    }

    #[test]
    fn load_or_seed_falls_back_on_corrupt_blob() {
        let backend = MemoryBackend::with_blob("definitely not json");
        assert_eq!(load_or_seed(&backend), Database::seed());
    }

    #[test]
    fn load_or_seed_reads_an_existing_snapshot() {
        let mut db = Database::seed();
        db.pilars.clear();
        let backend = MemoryBackend::with_blob(db.to_blob().unwrap());
        let loaded = load_or_seed(&backend);
        assert!(loaded.pilars.is_empty());
        assert_eq!(loaded.next_ids.pilar, db.next_ids.pilar);
    }
}
