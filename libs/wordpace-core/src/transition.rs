//! Level/streak state machine for submitted answers.

use crate::types::{Level, ReviewMode, Streak};

/// Outcome of folding one answer into a word's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub level: Level,
    pub streak: Streak,
    /// Points this answer contributes to the learner's total score.
    pub score: i64,
}

/// Fold one answer into the prior (level, streak) of a word.
///
/// Learn mode restarts the pair at the bottom regardless of correctness.
/// Review mode promotes on a correct answer (scoring the level held
/// before the promotion) and demotes on a miss, resetting the streak.
pub fn apply_answer(
    mode: ReviewMode,
    is_correct: bool,
    level: Level,
    streak: Streak,
) -> AnswerOutcome {
    match mode {
        ReviewMode::Learn => AnswerOutcome {
            level: Level::MIN,
            streak: Streak::MIN,
            score: 1,
        },
        ReviewMode::Review if !is_correct => AnswerOutcome {
            level: level.demoted(),
            streak: streak.reset(),
            score: 0,
        },
        ReviewMode::Review => AnswerOutcome {
            level: level.promoted(),
            streak: streak.advanced(),
            score: level.get() as i64,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn learn_restarts_pair_and_scores_one() {
        let outcome = apply_answer(ReviewMode::Learn, true, Level::new(4), Streak::new(9));
        assert_eq!(outcome.level, Level::MIN);
        assert_eq!(outcome.streak, Streak::MIN);
        assert_eq!(outcome.score, 1);
    }

    #[test]
    fn learn_ignores_correctness() {
        let right = apply_answer(ReviewMode::Learn, true, Level::new(3), Streak::new(5));
        let wrong = apply_answer(ReviewMode::Learn, false, Level::new(3), Streak::new(5));
        assert_eq!(right, wrong);
    }

    #[test]
    fn correct_review_promotes_and_scores_prior_level() {
        let outcome = apply_answer(ReviewMode::Review, true, Level::new(3), Streak::new(4));
        assert_eq!(outcome.level, Level::new(4));
        assert_eq!(outcome.streak, Streak::new(5));
        assert_eq!(outcome.score, 3);
    }

    #[test]
    fn correct_review_saturates_at_top() {
        let outcome = apply_answer(ReviewMode::Review, true, Level::MAX, Streak::MAX);
        assert_eq!(outcome.level, Level::MAX);
        assert_eq!(outcome.streak, Streak::MAX);
        assert_eq!(outcome.score, 5);
    }

    #[test]
    fn incorrect_review_demotes_and_resets_streak() {
        let outcome = apply_answer(ReviewMode::Review, false, Level::new(3), Streak::new(7));
        assert_eq!(outcome.level, Level::new(2));
        assert_eq!(outcome.streak, Streak::MIN);
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn incorrect_review_at_level_one_stays_at_level_one() {
        let outcome = apply_answer(ReviewMode::Review, false, Level::MIN, Streak::new(2));
        assert_eq!(outcome.level, Level::MIN);
        assert_eq!(outcome.streak, Streak::MIN);
    }

    #[test]
    fn outcomes_hold_invariants_across_the_grid() {
        for level in 1..=5u8 {
            for streak in 1..=10u8 {
                for (mode, is_correct) in [
                    (ReviewMode::Learn, true),
                    (ReviewMode::Review, true),
                    (ReviewMode::Review, false),
                ] {
                    let outcome =
                        apply_answer(mode, is_correct, Level::new(level), Streak::new(streak));
                    assert!((1..=5).contains(&outcome.level.get()));
                    assert!((1..=10).contains(&outcome.streak.get()));
                    assert!(outcome.score >= 0);
                }
            }
        }
    }
}
