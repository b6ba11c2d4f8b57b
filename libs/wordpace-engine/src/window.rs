//! Review-ready window selection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wordpace_core::{review_cutoff, time_until, TimeRemaining};

use crate::error::Result;
use crate::models::WordProgress;
use crate::store::StateFilter;
use crate::ProgressEngine;

/// Words inside the review-ready window of one learner.
///
/// The window always contains the earliest scheduled word plus anything
/// due within the window margin after it, even when the cutoff is still
/// in the future.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueWindow {
    pub cutoff_time: DateTime<Utc>,
    pub words: Vec<WordProgress>,
}

impl DueWindow {
    /// Whether the window has opened and the words are ready to review.
    pub fn is_ready(&self, now: DateTime<Utc>) -> bool {
        self.cutoff_time <= now
    }

    /// Clock time until the window opens, zero once it has.
    pub fn time_until_ready(&self, now: DateTime<Utc>) -> TimeRemaining {
        time_until(self.cutoff_time, now)
    }
}

impl ProgressEngine {
    /// Words due for review, always served live from the store.
    pub async fn review_queue(&self, learner_id: Uuid) -> Result<DueWindow> {
        let rows = self.store.query(learner_id, StateFilter::default()).await?;
        Ok(select_due(rows, Utc::now()))
    }
}

/// Select the rows whose next review falls inside the window.
pub(crate) fn select_due(rows: Vec<WordProgress>, now: DateTime<Utc>) -> DueWindow {
    let min_next = rows.iter().map(|row| row.state.next_review_at).min();
    let cutoff_time = review_cutoff(min_next, now);
    let words = rows
        .into_iter()
        .filter(|row| row.state.next_review_at <= cutoff_time)
        .collect();
    DueWindow { cutoff_time, words }
}
