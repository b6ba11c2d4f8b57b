//! Interval scheduling for word reviews.
//!
//! Intervals grow with mastery level and streak, scaled by the question
//! format, plus a random minute offset so a batch of words does not come
//! due at the same instant.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::types::{Level, QuestionFormat, Streak, TimeRemaining};

/// Base interval in hours for each mastery level, index `level - 1`.
pub const LEVEL_BASE_HOURS: [f64; 5] = [0.5, 2.5, 12.5, 62.5, 312.5];

/// Minutes the review-ready window extends past the earliest due word.
pub const REVIEW_WINDOW_MINUTES: i64 = 60;

/// Hours until the next review for a given state, before jitter.
pub fn base_interval_hours(level: Level, streak: Streak, format: QuestionFormat) -> f64 {
    streak.get() as f64 * format.multiplier() * LEVEL_BASE_HOURS[(level.get() - 1) as usize]
}

/// Next due time: `now` plus the base interval plus 0-59 random minutes.
pub fn next_review_at<R: Rng + ?Sized>(
    level: Level,
    streak: Streak,
    format: QuestionFormat,
    now: DateTime<Utc>,
    rng: &mut R,
) -> DateTime<Utc> {
    let base_seconds = (base_interval_hours(level, streak, format) * 3600.0).round() as i64;
    let jitter_minutes = rng.gen_range(0..60);
    now + Duration::seconds(base_seconds) + Duration::minutes(jitter_minutes)
}

/// Cutoff of the review-ready window.
///
/// A learner with no scheduled words gets `now`; otherwise the window
/// extends [`REVIEW_WINDOW_MINUTES`] past the earliest due word, never
/// behind `now`.
pub fn review_cutoff(
    min_next_review: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    match min_next_review {
        Some(min_next) => (min_next + Duration::minutes(REVIEW_WINDOW_MINUTES)).max(now),
        None => now,
    }
}

/// Wall-clock time left until `cutoff`, zeroed once it has passed.
pub fn time_until(cutoff: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    let total_seconds = (cutoff - now).num_seconds();
    if total_seconds < 0 {
        return TimeRemaining::ZERO;
    }
    TimeRemaining {
        hours: total_seconds / 3600,
        minutes: total_seconds % 3600 / 60,
        seconds: total_seconds % 60,
    }
}
