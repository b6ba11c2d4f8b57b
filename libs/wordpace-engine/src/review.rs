//! Batch answer processing.

use chrono::Utc;
use uuid::Uuid;

use wordpace_core::{apply_answer, ReviewMode, ReviewState};

use crate::error::{EngineError, Result};
use crate::keys;
use crate::models::{BatchResult, SubmitBatchRequest, WordProgress};
use crate::store::ProgressBatch;
use crate::ProgressEngine;

impl ProgressEngine {
    /// Commit one session's answers.
    ///
    /// Validates the batch, resolves every content reference, folds each
    /// answer through the state machine, and commits word states, lesson
    /// completion, course enrollment, and the score delta as one
    /// transaction. Nothing is written when validation or resolution
    /// fails. After the commit the learner's cached views are dropped;
    /// a cache failure there only logs, TTL expiry catches up.
    pub async fn submit_review_batch(
        &self,
        learner_id: Uuid,
        request: SubmitBatchRequest,
    ) -> Result<BatchResult> {
        let now = Utc::now();

        if request.mode == ReviewMode::Learn && request.lesson_id.is_none() {
            return Err(EngineError::Validation(
                "learn batches must reference a lesson".to_string(),
            ));
        }
        if request.mode == ReviewMode::Review {
            if let Some(answer) = request.words.iter().find(|a| a.is_correct.is_none()) {
                return Err(EngineError::Validation(format!(
                    "review answer for word {} is missing is_correct",
                    answer.word_id
                )));
            }
        }

        let lesson = match request.lesson_id {
            Some(lesson_id) => Some(
                self.catalog
                    .lesson(lesson_id)
                    .await?
                    .ok_or_else(|| EngineError::NotFound(format!("lesson {}", lesson_id)))?,
            ),
            None => None,
        };

        let word_ids: Vec<i64> = request.words.iter().map(|a| a.word_id).collect();
        let resolved = self.catalog.words(&word_ids).await?;
        for (answer, word) in request.words.iter().zip(&resolved) {
            if word.is_none() {
                return Err(EngineError::NotFound(format!("word {}", answer.word_id)));
            }
        }

        let mut states = Vec::with_capacity(request.words.len());
        let mut score_delta = 0;
        for answer in &request.words {
            let outcome = apply_answer(
                request.mode,
                answer.is_correct.unwrap_or(true),
                answer.level,
                answer.streak,
            );
            score_delta += outcome.score;

            let next_review_at =
                self.schedule_next_review(outcome.level, outcome.streak, answer.question_format, now);
            states.push(WordProgress {
                learner_id,
                word_id: answer.word_id,
                state: ReviewState {
                    level: outcome.level,
                    streak: outcome.streak,
                    next_review_at,
                    last_reviewed_at: now,
                },
                learned_at: now,
            });
        }

        // Only learn batches cascade into lesson and course records; a
        // lesson without a parent course ends the cascade early.
        let (lesson_id, course_id) = match (request.mode, &lesson) {
            (ReviewMode::Learn, Some(lesson)) => (Some(lesson.id), lesson.course_id),
            _ => (None, None),
        };

        self.store
            .commit_batch(ProgressBatch {
                learner_id,
                submitted_at: now,
                states,
                lesson_id,
                course_id,
                score_delta,
            })
            .await?;

        tracing::debug!(
            "committed {} batch of {} words for learner {} (score delta {})",
            request.mode.as_str(),
            word_ids.len(),
            learner_id,
            score_delta
        );

        if let Err(error) = self
            .cache
            .delete_by_prefix(&keys::learner_prefix(learner_id))
            .await
        {
            tracing::warn!(
                "cache invalidation failed for learner {}: {}",
                learner_id,
                error
            );
        }

        // Reload committed rows so the result carries the stored
        // learned_at, not the batch timestamp.
        let mut words = Vec::with_capacity(word_ids.len());
        for &word_id in &word_ids {
            let row = self
                .store
                .word_state(learner_id, word_id)
                .await?
                .ok_or_else(|| {
                    EngineError::Store(format!("word {} missing after commit", word_id))
                })?;
            words.push(row);
        }

        Ok(BatchResult {
            mode: request.mode,
            lesson_id: request.lesson_id,
            words,
        })
    }
}
