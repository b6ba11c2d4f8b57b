//! Cached progress aggregates.
//!
//! Every view here is cache-backed. Cached documents embed their own
//! `cutoff_time`; on a hit the `time_until_next_review` field is
//! recomputed against the live clock, so a fresh-looking countdown
//! never requires a store round trip.

use chrono::Utc;
use uuid::Uuid;

use wordpace_core::{time_until, Level};

use crate::error::Result;
use crate::keys;
use crate::models::{
    LeaderboardEntry, LearnedWordsOverview, LevelCounts, LevelGroup, Page, ProgressSnapshot,
    TierCounts, WordProgress,
};
use crate::store::StateFilter;
use crate::window::select_due;
use crate::ProgressEngine;

impl ProgressEngine {
    /// Progress summary: level and tier counts plus the review window.
    pub async fn progress_snapshot(&self, learner_id: Uuid) -> Result<ProgressSnapshot> {
        let key = keys::snapshot(learner_id);
        if let Some(mut snapshot) = self.cache_read::<ProgressSnapshot>(&key).await {
            snapshot.time_until_next_review = time_until(snapshot.cutoff_time, Utc::now());
            return Ok(snapshot);
        }

        let now = Utc::now();
        let rows = self.store.query(learner_id, StateFilter::default()).await?;

        let word_ids: Vec<i64> = rows.iter().map(|row| row.word_id).collect();
        let catalog_words = self.catalog.words(&word_ids).await?;

        let mut level_counts = LevelCounts::default();
        let mut tier_counts = TierCounts::default();
        for (row, word) in rows.iter().zip(&catalog_words) {
            level_counts.increment(row.state.level);
            if let Some(cefr) = word.as_ref().and_then(|word| word.cefr) {
                tier_counts.increment(cefr.tier());
            }
        }

        let window = select_due(rows, now);
        let snapshot = ProgressSnapshot {
            level_counts,
            tier_counts,
            review_word_count: window.words.len(),
            time_until_next_review: window.time_until_ready(now),
            cutoff_time: window.cutoff_time,
        };
        self.cache_write(&key, &snapshot, self.config.snapshot_ttl).await;
        Ok(snapshot)
    }

    /// Snapshot numbers plus up to the configured group size of words
    /// per level, ordered by word id.
    pub async fn learned_words(&self, learner_id: Uuid) -> Result<LearnedWordsOverview> {
        let key = keys::learned_overview(learner_id);
        if let Some(mut overview) = self.cache_read::<LearnedWordsOverview>(&key).await {
            overview.time_until_next_review = time_until(overview.cutoff_time, Utc::now());
            return Ok(overview);
        }

        let now = Utc::now();
        let rows = self.store.query(learner_id, StateFilter::default()).await?;

        let mut level_counts = LevelCounts::default();
        for row in &rows {
            level_counts.increment(row.state.level);
        }

        let groups = Level::all()
            .into_iter()
            .map(|level| LevelGroup {
                level,
                words: rows
                    .iter()
                    .filter(|row| row.state.level == level)
                    .take(self.config.learned_group_size)
                    .cloned()
                    .collect(),
            })
            .collect();

        let window = select_due(rows, now);
        let overview = LearnedWordsOverview {
            level_counts,
            review_word_count: window.words.len(),
            time_until_next_review: window.time_until_ready(now),
            cutoff_time: window.cutoff_time,
            groups,
        };
        self.cache_write(&key, &overview, self.config.snapshot_ttl).await;
        Ok(overview)
    }

    /// One page of the learned-words listing, optionally filtered by
    /// level. Pages are numbered from 1; a page past the end is empty.
    pub async fn learned_words_page(
        &self,
        learner_id: Uuid,
        level: Option<Level>,
        page: usize,
        page_size: Option<usize>,
    ) -> Result<Page<WordProgress>> {
        let page = page.max(1);
        let page_size = page_size
            .unwrap_or(self.config.learned_page_size)
            .clamp(1, self.config.learned_page_size_max);

        let key = keys::learned_page(learner_id, level, page, page_size);
        if let Some(listing) = self.cache_read::<Page<WordProgress>>(&key).await {
            return Ok(listing);
        }

        let rows = self.store.query(learner_id, StateFilter { level }).await?;
        let total = rows.len();
        let items = rows
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .collect();

        let listing = Page { items, page, page_size, total };
        self.cache_write(&key, &listing, self.config.snapshot_ttl).await;
        Ok(listing)
    }

    /// One page of the global leaderboard, ordered by total score
    /// descending. Freshness is TTL-only; learner invalidation never
    /// touches these pages.
    pub async fn leaderboard(
        &self,
        page: usize,
        page_size: Option<usize>,
    ) -> Result<Page<LeaderboardEntry>> {
        let page = page.max(1);
        let page_size = page_size
            .unwrap_or(self.config.leaderboard_page_size)
            .clamp(1, self.config.leaderboard_page_size);

        let key = keys::leaderboard_page(page, page_size);
        if let Some(listing) = self.cache_read::<Page<LeaderboardEntry>>(&key).await {
            return Ok(listing);
        }

        let (items, total) = self
            .store
            .leaderboard_page((page - 1) * page_size, page_size)
            .await?;

        let listing = Page { items, page, page_size, total };
        self.cache_write(&key, &listing, self.config.leaderboard_ttl).await;
        Ok(listing)
    }
}
