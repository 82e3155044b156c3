//! Durable key-value storage for user preferences.
//!
//! The page persists exactly one value (the appearance mode), but the
//! storage boundary is a plain string map so tests and hosts can swap the
//! backing store:
//!
//! - [`MemoryStorage`]: in-process map, lost on exit
//! - [`DisabledStorage`]: every call fails, as in a browser with storage off
//! - [`FileStorage`]: one JSON object on disk
//!
//! Callers treat every [`StorageError`] as recoverable.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::{DisabledStorage, MemoryStorage};

use std::path::PathBuf;

/// Error returned when durable storage cannot be read or written.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Storage is switched off or otherwise not reachable.
    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },

    /// The backing file could not be read or written.
    #[error("storage i/o failed for `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not hold a string map.
    #[error("storage file `{}` is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A persistent string key-value store.
pub trait Storage {
    /// Reads a key. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
