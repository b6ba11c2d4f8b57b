//! Progress persistence collaborator.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use wordpace_core::Level;

use crate::error::Result;
use crate::models::{CourseEnrollment, LeaderboardEntry, LessonCompletion, WordProgress};

/// Filter for progress queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateFilter {
    pub level: Option<Level>,
}

/// Everything one batch submission writes.
///
/// `submitted_at` stamps the lesson, enrollment, and leaderboard rows,
/// keeping implementations clock-free.
#[derive(Debug, Clone)]
pub struct ProgressBatch {
    pub learner_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    /// State upserts keyed by (learner, word); `learned_at` is
    /// preserved when the row already exists.
    pub states: Vec<WordProgress>,
    /// Lesson completion upsert; refreshes `completed_at` when the row
    /// already exists.
    pub lesson_id: Option<i64>,
    /// Course enrollment, created only if absent.
    pub course_id: Option<i64>,
    /// Added to the learner's leaderboard total inside the commit.
    pub score_delta: i64,
}

/// Persistence interface for learner progress.
///
/// `commit_batch` is the only write: implementations apply the whole
/// batch or none of it, serialize concurrent commits touching the same
/// learner, and apply the leaderboard delta as an increment inside the
/// same transaction. Reads issued after a commit returns see its
/// writes.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Get the progress row for one (learner, word) pair.
    async fn word_state(&self, learner_id: Uuid, word_id: i64) -> Result<Option<WordProgress>>;

    /// Get a learner's progress rows, ordered by word id.
    async fn query(&self, learner_id: Uuid, filter: StateFilter) -> Result<Vec<WordProgress>>;

    /// Apply one batch atomically.
    async fn commit_batch(&self, batch: ProgressBatch) -> Result<()>;

    /// Get a lesson completion row.
    async fn lesson_completion(
        &self,
        learner_id: Uuid,
        lesson_id: i64,
    ) -> Result<Option<LessonCompletion>>;

    /// Get a course enrollment row.
    async fn course_enrollment(
        &self,
        learner_id: Uuid,
        course_id: i64,
    ) -> Result<Option<CourseEnrollment>>;

    /// Get a learner's leaderboard row.
    async fn leaderboard_entry(&self, learner_id: Uuid) -> Result<Option<LeaderboardEntry>>;

    /// Get one leaderboard page ordered by score descending (ties by
    /// learner id) along with the total number of rows.
    async fn leaderboard_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<(Vec<LeaderboardEntry>, usize)>;
}
