//! Shared engine setup and test doubles for integration tests.
//!
//! Every test runs against in-memory collaborators, so no external
//! services are needed. The engine RNG is seeded to keep scheduling
//! jitter reproducible across runs.

pub mod fixtures;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use uuid::Uuid;

use wordpace_engine::cache::{Cache, CacheError, MemoryCache};
use wordpace_engine::error::Result as EngineResult;
use wordpace_engine::models::{
    CourseEnrollment, LeaderboardEntry, LessonCompletion, WordProgress,
};
use wordpace_engine::store::{MemoryStore, ProgressBatch, ProgressStore, StateFilter};
use wordpace_engine::{EngineConfig, EngineError, ProgressEngine};

/// Route engine tracing to the test output when RUST_LOG is set.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Engine wired to in-memory collaborators, plus direct handles to the
/// store and cache for asserting on what the engine wrote.
pub struct TestContext {
    pub engine: ProgressEngine,
    pub store: Arc<MemoryStore>,
    pub cache: Arc<MemoryCache>,
    pub learner_id: Uuid,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        init_tracing();
        let store = Arc::new(MemoryStore::new());
        let cache = Arc::new(MemoryCache::new());
        let engine = ProgressEngine::with_rng(
            store.clone(),
            cache.clone(),
            Arc::new(fixtures::catalog()),
            config,
            StdRng::seed_from_u64(17),
        );
        Self {
            engine,
            store,
            cache,
            learner_id: Uuid::new_v4(),
        }
    }
}

/// Build an engine around caller-provided doubles, seeded like
/// [`TestContext`].
pub fn engine_with(store: Arc<dyn ProgressStore>, cache: Arc<dyn Cache>) -> ProgressEngine {
    init_tracing();
    ProgressEngine::with_rng(
        store,
        cache,
        Arc::new(fixtures::catalog()),
        EngineConfig::default(),
        StdRng::seed_from_u64(17),
    )
}

/// Cache double that can be switched into a failing state at runtime.
///
/// While failing, every operation returns a backend error; otherwise it
/// behaves like [`MemoryCache`].
pub struct FlakyCache {
    inner: MemoryCache,
    failing: AtomicBool,
}

impl FlakyCache {
    pub fn new() -> Self {
        Self {
            inner: MemoryCache::new(),
            failing: AtomicBool::new(false),
        }
    }

    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), CacheError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(CacheError::Backend("cache offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Cache for FlakyCache {
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        self.check()?;
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Value, ttl: std::time::Duration) -> Result<(), CacheError> {
        self.check()?;
        self.inner.set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.check()?;
        self.inner.delete(key).await
    }

    async fn delete_by_prefix(&self, prefix: &str) -> Result<(), CacheError> {
        self.check()?;
        self.inner.delete_by_prefix(prefix).await
    }
}

/// Store double whose commits always time out, for exercising the
/// conflict path. Reads delegate to an empty in-memory store.
#[derive(Default)]
pub struct FailingStore {
    inner: MemoryStore,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressStore for FailingStore {
    async fn word_state(&self, learner_id: Uuid, word_id: i64) -> EngineResult<Option<WordProgress>> {
        self.inner.word_state(learner_id, word_id).await
    }

    async fn query(&self, learner_id: Uuid, filter: StateFilter) -> EngineResult<Vec<WordProgress>> {
        self.inner.query(learner_id, filter).await
    }

    async fn commit_batch(&self, _batch: ProgressBatch) -> EngineResult<()> {
        Err(EngineError::Conflict("commit timed out".to_string()))
    }

    async fn lesson_completion(
        &self,
        learner_id: Uuid,
        lesson_id: i64,
    ) -> EngineResult<Option<LessonCompletion>> {
        self.inner.lesson_completion(learner_id, lesson_id).await
    }

    async fn course_enrollment(
        &self,
        learner_id: Uuid,
        course_id: i64,
    ) -> EngineResult<Option<CourseEnrollment>> {
        self.inner.course_enrollment(learner_id, course_id).await
    }

    async fn leaderboard_entry(&self, learner_id: Uuid) -> EngineResult<Option<LeaderboardEntry>> {
        self.inner.leaderboard_entry(learner_id).await
    }

    async fn leaderboard_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> EngineResult<(Vec<LeaderboardEntry>, usize)> {
        self.inner.leaderboard_page(offset, limit).await
    }
}
