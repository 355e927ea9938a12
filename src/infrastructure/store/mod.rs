//! Per-key string storage for the portal state.
//!
//! The store trait abstracts the underlying medium, allowing both a
//! file-based (production) and an in-memory (testing) implementation.
//! Values are opaque strings; the collections stored under the fixed keys
//! happen to be JSON, but the store does not know that. There is no
//! transactional guarantee beyond the medium's atomicity per single key
//! write.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Key of the registrants collection (JSON array).
pub const REGISTRANTS_KEY: &str = "registrants";
/// Key of the credentials collection (JSON array).
pub const CREDENTIALS_KEY: &str = "credentials";
/// Key of the matricule counter map (JSON object, year → last issued).
pub const SEQUENCE_KEY: &str = "matricule_seq";
/// Key of the session slot (plain registrant id, absent when anonymous).
pub const SESSION_KEY: &str = "session";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid store key: {0:?}")]
    InvalidKey(String),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// String-keyed store scoped to one portal instance. Keys are simple
/// identifiers (`[a-z0-9_]`), which lets the file backend map them
/// directly to file names.
pub trait KeyValueStore: Clone + Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
