//! Progress engine for wordpace.
//!
//! Sits between the content system and its clients: schedules each
//! (learner, word) pair through wordpace-core, folds submitted answer
//! batches into word/lesson/course/leaderboard state in one atomic
//! commit, and serves cached progress aggregates with learner-scoped
//! invalidation.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod keys;
pub mod models;
pub mod store;
pub mod window;

mod aggregate;
mod review;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use wordpace_core::{Level, QuestionFormat, Streak};

pub use cache::{Cache, CacheError};
pub use catalog::ContentCatalog;
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use store::ProgressStore;
pub use window::DueWindow;

/// Shared progress engine, cheap to clone.
#[derive(Clone)]
pub struct ProgressEngine {
    store: Arc<dyn ProgressStore>,
    cache: Arc<dyn Cache>,
    catalog: Arc<dyn ContentCatalog>,
    config: EngineConfig,
    rng: Arc<Mutex<StdRng>>,
}

impl ProgressEngine {
    /// Create an engine with entropy-seeded scheduling jitter.
    pub fn new(
        store: Arc<dyn ProgressStore>,
        cache: Arc<dyn Cache>,
        catalog: Arc<dyn ContentCatalog>,
        config: EngineConfig,
    ) -> Self {
        Self::with_rng(store, cache, catalog, config, StdRng::from_entropy())
    }

    /// Create an engine with a caller-provided RNG for reproducible
    /// schedules.
    pub fn with_rng(
        store: Arc<dyn ProgressStore>,
        cache: Arc<dyn Cache>,
        catalog: Arc<dyn ContentCatalog>,
        config: EngineConfig,
        rng: StdRng,
    ) -> Self {
        Self {
            store,
            cache,
            catalog,
            config,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Drop every cached view of one learner.
    ///
    /// Also serves as the logout hook: ending a session clears the
    /// learner's read side so the next one recomputes from the store.
    pub async fn invalidate_learner(&self, learner_id: Uuid) -> Result<()> {
        self.cache
            .delete_by_prefix(&keys::learner_prefix(learner_id))
            .await?;
        tracing::debug!("invalidated cached views for learner {}", learner_id);
        Ok(())
    }

    /// Schedule the next review, drawing jitter from the engine RNG.
    pub(crate) fn schedule_next_review(
        &self,
        level: Level,
        streak: Streak,
        format: QuestionFormat,
        now: DateTime<Utc>,
    ) -> DateTime<Utc> {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        wordpace_core::next_review_at(level, streak, format, now, &mut *rng)
    }

    /// Read a cached document, treating backend failures and
    /// undecodable entries as misses.
    pub(crate) async fn cache_read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_cache_read(key).await {
            Ok(found) => found,
            Err(error) => {
                tracing::warn!("cache read failed for {}, recomputing: {}", key, error);
                None
            }
        }
    }

    async fn try_cache_read<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> std::result::Result<Option<T>, CacheError> {
        match self.cache.get(key).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Write a document to the cache. Failures are logged and dropped;
    /// the caller already holds the recomputed value.
    pub(crate) async fn cache_write<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        if let Err(error) = self.try_cache_write(key, value, ttl).await {
            tracing::warn!("cache write failed for {}: {}", key, error);
        }
    }

    async fn try_cache_write<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> std::result::Result<(), CacheError> {
        let encoded = serde_json::to_value(value)?;
        self.cache.set(key, encoded, ttl).await
    }
}
