//! Engine entities and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from wordpace-core
pub use wordpace_core::types::{
    CefrLevel, DifficultyTier, Level, QuestionFormat, ReviewMode, ReviewState, Streak,
    TimeRemaining,
};

// === Progress Entities ===

/// Progress row for one (learner, word) pair.
///
/// Created the first time the pair is answered, updated on every
/// subsequent answer, never deleted. `learned_at` keeps the time of
/// first contact across updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordProgress {
    pub learner_id: Uuid,
    pub word_id: i64,
    #[serde(flatten)]
    pub state: ReviewState,
    pub learned_at: DateTime<Utc>,
}

/// Completion record of a lesson by a learner, unique per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonCompletion {
    pub learner_id: Uuid,
    pub lesson_id: i64,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Enrollment of a learner in a course, created on first lesson
/// completion and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEnrollment {
    pub learner_id: Uuid,
    pub course_id: i64,
    pub started_at: DateTime<Utc>,
}

/// One learner's row on the global leaderboard.
///
/// Written only through batch commits; the total never decreases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub learner_id: Uuid,
    pub total_score: i64,
    pub updated_at: DateTime<Utc>,
}

// === Batch Submission Types ===

/// One answered word inside a batch submission.
///
/// `level` and `streak` echo the state the client was quizzing from;
/// review mode folds the answer into them, learn mode ignores them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordAnswer {
    pub word_id: i64,
    pub level: Level,
    pub streak: Streak,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
    pub question_format: QuestionFormat,
}

/// Batch of answers submitted at the end of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitBatchRequest {
    pub mode: ReviewMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<i64>,
    pub words: Vec<WordAnswer>,
}

/// Committed state of every word in a submitted batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    pub mode: ReviewMode,
    pub lesson_id: Option<i64>,
    pub words: Vec<WordProgress>,
}

// === Aggregate Types ===

/// Word counts per mastery level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    pub level1: u64,
    pub level2: u64,
    pub level3: u64,
    pub level4: u64,
    pub level5: u64,
}

impl LevelCounts {
    /// Count one word at `level`.
    pub fn increment(&mut self, level: Level) {
        match level.get() {
            1 => self.level1 += 1,
            2 => self.level2 += 1,
            3 => self.level3 += 1,
            4 => self.level4 += 1,
            _ => self.level5 += 1,
        }
    }

    pub fn get(&self, level: Level) -> u64 {
        match level.get() {
            1 => self.level1,
            2 => self.level2,
            3 => self.level3,
            4 => self.level4,
            _ => self.level5,
        }
    }

    pub fn total(&self) -> u64 {
        self.level1 + self.level2 + self.level3 + self.level4 + self.level5
    }
}

/// Word counts per difficulty tier.
///
/// Words whose catalog entry carries no CEFR tag land in no bucket, so
/// the tier total can be less than the level total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub basic: u64,
    pub intermediate: u64,
    pub advanced: u64,
}

impl TierCounts {
    /// Count one word in `tier`.
    pub fn increment(&mut self, tier: DifficultyTier) {
        match tier {
            DifficultyTier::Basic => self.basic += 1,
            DifficultyTier::Intermediate => self.intermediate += 1,
            DifficultyTier::Advanced => self.advanced += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.basic + self.intermediate + self.advanced
    }
}

/// Progress summary for one learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub level_counts: LevelCounts,
    pub tier_counts: TierCounts,
    pub review_word_count: usize,
    pub time_until_next_review: TimeRemaining,
    pub cutoff_time: DateTime<Utc>,
}

/// Snapshot numbers plus capped per-level word groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnedWordsOverview {
    pub level_counts: LevelCounts,
    pub review_word_count: usize,
    pub time_until_next_review: TimeRemaining,
    pub cutoff_time: DateTime<Utc>,
    pub groups: Vec<LevelGroup>,
}

/// Words at one level, capped at the configured group size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelGroup {
    pub level: Level,
    pub words: Vec<WordProgress>,
}

/// One page of an ordered listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}
