//! In-memory progress store.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{CourseEnrollment, LeaderboardEntry, LessonCompletion, WordProgress};

use super::{ProgressBatch, ProgressStore, StateFilter};

#[derive(Default)]
struct StoreInner {
    /// Per-learner rows keyed by word id, which keeps listings ordered.
    states: HashMap<Uuid, BTreeMap<i64, WordProgress>>,
    lessons: HashMap<(Uuid, i64), LessonCompletion>,
    courses: HashMap<(Uuid, i64), CourseEnrollment>,
    leaderboard: HashMap<Uuid, LeaderboardEntry>,
}

/// In-memory [`ProgressStore`].
///
/// Commits take the write lock, so batches serialize and readers never
/// observe a half-applied batch.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressStore for MemoryStore {
    async fn word_state(&self, learner_id: Uuid, word_id: i64) -> Result<Option<WordProgress>> {
        let inner = self.inner.read().await;
        Ok(inner
            .states
            .get(&learner_id)
            .and_then(|words| words.get(&word_id))
            .cloned())
    }

    async fn query(&self, learner_id: Uuid, filter: StateFilter) -> Result<Vec<WordProgress>> {
        let inner = self.inner.read().await;
        let rows = match inner.states.get(&learner_id) {
            Some(words) => words
                .values()
                .filter(|row| filter.level.map_or(true, |level| row.state.level == level))
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        Ok(rows)
    }

    async fn commit_batch(&self, batch: ProgressBatch) -> Result<()> {
        let mut inner = self.inner.write().await;

        let words = inner.states.entry(batch.learner_id).or_default();
        for row in batch.states {
            match words.get_mut(&row.word_id) {
                Some(existing) => existing.state = row.state,
                None => {
                    words.insert(row.word_id, row);
                }
            }
        }

        if let Some(lesson_id) = batch.lesson_id {
            inner
                .lessons
                .entry((batch.learner_id, lesson_id))
                .and_modify(|lesson| lesson.completed_at = Some(batch.submitted_at))
                .or_insert_with(|| LessonCompletion {
                    learner_id: batch.learner_id,
                    lesson_id,
                    started_at: batch.submitted_at,
                    completed_at: Some(batch.submitted_at),
                });
        }

        if let Some(course_id) = batch.course_id {
            inner
                .courses
                .entry((batch.learner_id, course_id))
                .or_insert_with(|| CourseEnrollment {
                    learner_id: batch.learner_id,
                    course_id,
                    started_at: batch.submitted_at,
                });
        }

        inner
            .leaderboard
            .entry(batch.learner_id)
            .and_modify(|entry| {
                entry.total_score += batch.score_delta;
                entry.updated_at = batch.submitted_at;
            })
            .or_insert_with(|| LeaderboardEntry {
                learner_id: batch.learner_id,
                total_score: batch.score_delta,
                updated_at: batch.submitted_at,
            });

        Ok(())
    }

    async fn lesson_completion(
        &self,
        learner_id: Uuid,
        lesson_id: i64,
    ) -> Result<Option<LessonCompletion>> {
        let inner = self.inner.read().await;
        Ok(inner.lessons.get(&(learner_id, lesson_id)).cloned())
    }

    async fn course_enrollment(
        &self,
        learner_id: Uuid,
        course_id: i64,
    ) -> Result<Option<CourseEnrollment>> {
        let inner = self.inner.read().await;
        Ok(inner.courses.get(&(learner_id, course_id)).cloned())
    }

    async fn leaderboard_entry(&self, learner_id: Uuid) -> Result<Option<LeaderboardEntry>> {
        let inner = self.inner.read().await;
        Ok(inner.leaderboard.get(&learner_id).cloned())
    }

    async fn leaderboard_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<(Vec<LeaderboardEntry>, usize)> {
        let inner = self.inner.read().await;
        let mut entries: Vec<LeaderboardEntry> = inner.leaderboard.values().cloned().collect();
        entries.sort_by(|a, b| {
            b.total_score
                .cmp(&a.total_score)
                .then_with(|| a.learner_id.cmp(&b.learner_id))
        });
        let total = entries.len();
        let page = entries.into_iter().skip(offset).take(limit).collect();
        Ok((page, total))
    }
}
