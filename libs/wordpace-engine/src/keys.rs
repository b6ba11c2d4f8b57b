//! Cache key scheme.
//!
//! Every learner-scoped key lives under `progress:{learner}:` so one
//! prefix delete drops the learner's whole read side. Leaderboard pages
//! are global and expire by TTL only.

use uuid::Uuid;
use wordpace_core::Level;

/// Prefix owning every cached view of one learner.
pub fn learner_prefix(learner_id: Uuid) -> String {
    format!("progress:{}:", learner_id)
}

/// Progress summary document.
pub fn snapshot(learner_id: Uuid) -> String {
    format!("progress:{}:summary", learner_id)
}

/// Grouped learned-words overview.
pub fn learned_overview(learner_id: Uuid) -> String {
    format!("progress:{}:learned", learner_id)
}

/// One page of the learned-words listing, keyed by its exact query.
pub fn learned_page(
    learner_id: Uuid,
    level: Option<Level>,
    page: usize,
    page_size: usize,
) -> String {
    let level = match level {
        Some(level) => level.get().to_string(),
        None => "all".to_string(),
    };
    format!(
        "progress:{}:learned:level={}:page={}:size={}",
        learner_id, level, page, page_size
    )
}

/// One page of the global leaderboard.
pub fn leaderboard_page(page: usize, page_size: usize) -> String {
    format!("leaderboard:page={}:size={}", page, page_size)
}
