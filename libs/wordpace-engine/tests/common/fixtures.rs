//! Seed catalog and request builders.

use wordpace_engine::catalog::{CatalogLesson, CatalogWord, MemoryCatalog};
use wordpace_engine::models::{
    CefrLevel, Level, QuestionFormat, ReviewMode, Streak, SubmitBatchRequest, WordAnswer,
};

/// Lesson every seeded word belongs to.
pub const LESSON_ID: i64 = 10;

/// Parent course of [`LESSON_ID`].
pub const COURSE_ID: i64 = 100;

/// Lesson seeded without a parent course.
pub const ORPHAN_LESSON_ID: i64 = 20;

/// Catalog with six words (CEFR A1, A2, B1, B2, C1, untagged) in one
/// lesson, plus a lesson that has no parent course.
pub fn catalog() -> MemoryCatalog {
    let tags = [
        Some(CefrLevel::A1),
        Some(CefrLevel::A2),
        Some(CefrLevel::B1),
        Some(CefrLevel::B2),
        Some(CefrLevel::C1),
        None,
    ];
    let mut catalog = MemoryCatalog::new()
        .with_lesson(CatalogLesson {
            id: LESSON_ID,
            course_id: Some(COURSE_ID),
        })
        .with_lesson(CatalogLesson {
            id: ORPHAN_LESSON_ID,
            course_id: None,
        });
    for (i, cefr) in tags.into_iter().enumerate() {
        catalog = catalog.with_word(CatalogWord {
            id: i as i64 + 1,
            lesson_id: Some(LESSON_ID),
            cefr,
        });
    }
    catalog
}

/// Answer for a learn pass; correctness is irrelevant in learn mode.
pub fn learn_answer(word_id: i64) -> WordAnswer {
    WordAnswer {
        word_id,
        level: Level::MIN,
        streak: Streak::MIN,
        is_correct: None,
        question_format: QuestionFormat::MultipleChoice,
    }
}

/// Review answer echoing the prior state the client quizzed from.
pub fn review_answer(word_id: i64, level: u8, streak: u8, is_correct: bool) -> WordAnswer {
    WordAnswer {
        word_id,
        level: Level::new(level),
        streak: Streak::new(streak),
        is_correct: Some(is_correct),
        question_format: QuestionFormat::FillBlank,
    }
}

/// Learn-mode batch against [`LESSON_ID`].
pub fn learn_batch(word_ids: &[i64]) -> SubmitBatchRequest {
    SubmitBatchRequest {
        mode: ReviewMode::Learn,
        lesson_id: Some(LESSON_ID),
        words: word_ids.iter().copied().map(learn_answer).collect(),
    }
}

/// Review-mode batch.
pub fn review_batch(words: Vec<WordAnswer>) -> SubmitBatchRequest {
    SubmitBatchRequest {
        mode: ReviewMode::Review,
        lesson_id: None,
        words,
    }
}
