// Document storage collaborator
//
// The pipeline never touches storage. CheckService persists uploads through
// the DocumentStore trait; MemoryStore is the in-process implementation.

use std::fmt;
use std::sync::{PoisonError, RwLock};

use hashbrown::HashMap;
use serde::Serialize;

/// Identity of the user a document belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable identifier of a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FileId(u64);

impl FileId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Listing entry for a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredFile {
    pub id: FileId,
    pub filename: String,
    pub size: usize,
}

/// Error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("file {id} not found for owner {owner}")]
    NotFound { owner: OwnerId, id: FileId },

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Persistence for checked documents.
pub trait DocumentStore: Send + Sync {
    /// Insert or replace the document named `filename` for `owner`. The id
    /// of an existing document is kept across updates.
    fn save(&self, owner: &OwnerId, filename: &str, contents: &[u8]) -> Result<FileId, StoreError>;

    /// Fetch a document's contents. Only the owner can load it.
    fn load(&self, owner: &OwnerId, id: FileId) -> Result<Vec<u8>, StoreError>;

    /// All documents belonging to `owner`, ordered by id.
    fn list(&self, owner: &OwnerId) -> Result<Vec<StoredFile>, StoreError>;
}

struct Entry {
    id: FileId,
    owner: OwnerId,
    filename: String,
    contents: Vec<u8>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    entries: HashMap<FileId, Entry>,
    by_name: HashMap<(OwnerId, String), FileId>,
}

/// In-memory DocumentStore.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("MemoryStore").field("files", &inner.entries.len()).finish()
    }
}

impl DocumentStore for MemoryStore {
    fn save(&self, owner: &OwnerId, filename: &str, contents: &[u8]) -> Result<FileId, StoreError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let key = (owner.clone(), filename.to_string());

        if let Some(&id) = inner.by_name.get(&key) {
            if let Some(entry) = inner.entries.get_mut(&id) {
                entry.contents = contents.to_vec();
                log::debug!("updated file {id} ({filename}) for {owner}");
                return Ok(id);
            }
        }

        inner.next_id += 1;
        let id = FileId(inner.next_id);
        inner.entries.insert(
            id,
            Entry {
                id,
                owner: owner.clone(),
                filename: filename.to_string(),
                contents: contents.to_vec(),
            },
        );
        inner.by_name.insert(key, id);
        log::debug!("stored file {id} ({filename}) for {owner}");
        Ok(id)
    }

    fn load(&self, owner: &OwnerId, id: FileId) -> Result<Vec<u8>, StoreError> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .entries
            .get(&id)
            .filter(|entry| &entry.owner == owner)
            .map(|entry| entry.contents.clone())
            .ok_or_else(|| StoreError::NotFound {
                owner: owner.clone(),
                id,
            })
    }

    fn list(&self, owner: &OwnerId) -> Result<Vec<StoredFile>, StoreError> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let mut files: Vec<StoredFile> = inner
            .entries
            .values()
            .filter(|entry| &entry.owner == owner)
            .map(|entry| StoredFile {
                id: entry.id,
                filename: entry.filename.clone(),
                size: entry.contents.len(),
            })
            .collect();
        files.sort_by_key(|file| file.id);
        Ok(files)
    }
}
