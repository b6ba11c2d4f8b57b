//! Core types for word scheduling and progress tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mastery level of a word.
///
/// Always within `1..=5`; out-of-range input is clamped, including values
/// arriving through deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(5);

    /// Create a level, clamping into `1..=5`.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// One level up, saturating at 5.
    pub fn promoted(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// One level down, saturating at 1.
    pub fn demoted(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }

    /// All levels in ascending order.
    pub fn all() -> [Level; 5] {
        [Level(1), Level(2), Level(3), Level(4), Level(5)]
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<u8> for Level {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

/// Consecutive-correct counter for a word.
///
/// Always within `1..=10`, clamped the same way as [`Level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Streak(u8);

impl Streak {
    pub const MIN: Streak = Streak(1);
    pub const MAX: Streak = Streak(10);

    /// Create a streak, clamping into `1..=10`.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Next streak after a correct answer, saturating at 10.
    pub fn advanced(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// Streak after an incorrect answer.
    pub fn reset(self) -> Self {
        Self::MIN
    }
}

impl Default for Streak {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<u8> for Streak {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Streak> for u8 {
    fn from(streak: Streak) -> Self {
        streak.0
    }
}

/// Question format presented to the learner.
///
/// Formats are ordered by recall effort; harder formats stretch the
/// review interval further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionFormat {
    MultipleChoice,
    FillBlank,
    Listening,
    Matching,
    DragDrop,
}

impl QuestionFormat {
    /// Interval multiplier applied by the scheduler.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::MultipleChoice => 1.0,
            Self::FillBlank => 1.1,
            Self::Listening => 1.2,
            Self::Matching => 1.3,
            Self::DragDrop => 1.5,
        }
    }

    /// Get the format name as a string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple_choice",
            Self::FillBlank => "fill_blank",
            Self::Listening => "listening",
            Self::Matching => "matching",
            Self::DragDrop => "drag_drop",
        }
    }
}

/// CEFR proficiency tag carried by catalog words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    /// Coarse difficulty bucket used by progress summaries.
    pub fn tier(self) -> DifficultyTier {
        match self {
            Self::A1 | Self::A2 => DifficultyTier::Basic,
            Self::B1 | Self::B2 => DifficultyTier::Intermediate,
            Self::C1 | Self::C2 => DifficultyTier::Advanced,
        }
    }
}

/// Difficulty grouping of CEFR levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyTier {
    Basic,
    Intermediate,
    Advanced,
}

/// How a batch of answers was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewMode {
    Learn,
    Review,
}

impl ReviewMode {
    /// Get the mode name as a string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Learn => "learn",
            Self::Review => "review",
        }
    }
}

/// Scheduling state of one (learner, word) pair, minus identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewState {
    pub level: Level,
    pub streak: Streak,
    pub next_review_at: DateTime<Utc>,
    pub last_reviewed_at: DateTime<Utc>,
}

/// Clock time remaining until a cutoff, zero-clamped once it has passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeRemaining {
    pub const ZERO: TimeRemaining = TimeRemaining {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}
