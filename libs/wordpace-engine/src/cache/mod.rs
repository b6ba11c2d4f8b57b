//! Read-side cache collaborator.
//!
//! The engine treats the cache as Redis-shaped: JSON documents under
//! string keys with a TTL, plus prefix deletion so one learner's keys
//! can be dropped in a single call. Failures are transient by contract;
//! callers recompute from the store or let TTL expiry catch up.

mod memory;

pub use memory::MemoryCache;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Cache failure. Never affects correctness of reads or commits.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache backend error: {0}")]
    Backend(String),

    #[error("cache encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Cache backend interface.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Fetch a document, `None` on miss or expiry.
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError>;

    /// Store a document for `ttl`.
    async fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<(), CacheError>;

    /// Drop one key. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Drop every key starting with `prefix`.
    async fn delete_by_prefix(&self, prefix: &str) -> Result<(), CacheError>;
}
