//! Key-value persistence
//!
//! The string-in, string-out store that persistent signals write through.
//! Injected into the state layer instead of being reached as a global.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::db::DbError;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Store lock poisoned")]
    Poisoned,
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// A text key-value store
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value under `key`, `None` if nothing was ever written
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}
