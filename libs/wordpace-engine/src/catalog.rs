//! Read-only content catalog collaborator.
//!
//! Words, lessons, and courses are owned by the content system. The
//! engine only needs existence checks, the parent course behind a
//! lesson, and CEFR tags for difficulty buckets.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use wordpace_core::CefrLevel;

use crate::error::Result;

/// Word as known to the content catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogWord {
    pub id: i64,
    pub lesson_id: Option<i64>,
    pub cefr: Option<CefrLevel>,
}

/// Lesson as known to the content catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogLesson {
    pub id: i64,
    pub course_id: Option<i64>,
}

/// Content lookup interface.
#[async_trait]
pub trait ContentCatalog: Send + Sync {
    /// Look up one word.
    async fn word(&self, word_id: i64) -> Result<Option<CatalogWord>>;

    /// Look up one lesson.
    async fn lesson(&self, lesson_id: i64) -> Result<Option<CatalogLesson>>;

    /// Look up a batch of words, preserving input order.
    async fn words(&self, word_ids: &[i64]) -> Result<Vec<Option<CatalogWord>>> {
        let mut words = Vec::with_capacity(word_ids.len());
        for &word_id in word_ids {
            words.push(self.word(word_id).await?);
        }
        Ok(words)
    }
}

/// In-memory [`ContentCatalog`] seeded up front.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    words: HashMap<i64, CatalogWord>,
    lessons: HashMap<i64, CatalogLesson>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word, builder style.
    pub fn with_word(mut self, word: CatalogWord) -> Self {
        self.words.insert(word.id, word);
        self
    }

    /// Add a lesson, builder style.
    pub fn with_lesson(mut self, lesson: CatalogLesson) -> Self {
        self.lessons.insert(lesson.id, lesson);
        self
    }
}

#[async_trait]
impl ContentCatalog for MemoryCatalog {
    async fn word(&self, word_id: i64) -> Result<Option<CatalogWord>> {
        Ok(self.words.get(&word_id).cloned())
    }

    async fn lesson(&self, lesson_id: i64) -> Result<Option<CatalogLesson>> {
        Ok(self.lessons.get(&lesson_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::new()
            .with_word(CatalogWord { id: 1, lesson_id: Some(10), cefr: Some(CefrLevel::A1) })
            .with_word(CatalogWord { id: 2, lesson_id: Some(10), cefr: None })
            .with_lesson(CatalogLesson { id: 10, course_id: Some(100) })
    }

    #[tokio::test]
    async fn word_lookup_hits_and_misses() {
        let catalog = catalog();
        assert!(catalog.word(1).await.unwrap().is_some());
        assert!(catalog.word(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lesson_lookup_carries_parent_course() {
        let catalog = catalog();
        let lesson = catalog.lesson(10).await.unwrap().unwrap();
        assert_eq!(lesson.course_id, Some(100));
    }

    #[tokio::test]
    async fn batch_lookup_preserves_input_order() {
        let catalog = catalog();
        let words = catalog.words(&[2, 99, 1]).await.unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].as_ref().map(|w| w.id), Some(2));
        assert!(words[1].is_none());
        assert_eq!(words[2].as_ref().map(|w| w.id), Some(1));
    }
}
