//! Core scheduling library for wordpace.
//!
//! Provides:
//! - Interval scheduling with per-format multipliers and minute jitter
//! - Review-ready window arithmetic
//! - The level/streak state machine for submitted answers
//! - Shared types (Level, Streak, QuestionFormat, ReviewState, etc.)

pub mod scheduler;
pub mod transition;
pub mod types;

pub use scheduler::{
    base_interval_hours, next_review_at, review_cutoff, time_until, LEVEL_BASE_HOURS,
    REVIEW_WINDOW_MINUTES,
};
pub use transition::{apply_answer, AnswerOutcome};
pub use types::{
    CefrLevel, DifficultyTier, Level, QuestionFormat, ReviewMode, ReviewState, Streak,
    TimeRemaining,
};
