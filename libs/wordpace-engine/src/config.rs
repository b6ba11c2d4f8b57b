//! Engine configuration.

use std::time::Duration;

/// Cache and listing tunables.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// TTL for progress summaries and learned-word listings.
    pub snapshot_ttl: Duration,
    /// TTL for leaderboard pages.
    pub leaderboard_ttl: Duration,
    /// Words shown per level in the learned-words overview.
    pub learned_group_size: usize,
    /// Default page size of the learned-words listing.
    pub learned_page_size: usize,
    /// Upper bound for caller-provided learned-words page sizes.
    pub learned_page_size_max: usize,
    /// Default and maximum page size of the leaderboard.
    pub leaderboard_page_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            snapshot_ttl: Duration::from_secs(60 * 15),
            leaderboard_ttl: Duration::from_secs(60 * 10),
            learned_group_size: 10,
            learned_page_size: 2,
            learned_page_size_max: 50,
            leaderboard_page_size: 10,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the environment, falling back to the
    /// defaults field by field.
    ///
    /// Reads `WORDPACE_SNAPSHOT_TTL_SECS`, `WORDPACE_LEADERBOARD_TTL_SECS`,
    /// `WORDPACE_LEARNED_GROUP_SIZE`, `WORDPACE_LEARNED_PAGE_SIZE`,
    /// `WORDPACE_LEARNED_PAGE_SIZE_MAX`, and
    /// `WORDPACE_LEADERBOARD_PAGE_SIZE`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            snapshot_ttl: env_secs("WORDPACE_SNAPSHOT_TTL_SECS")
                .unwrap_or(defaults.snapshot_ttl),
            leaderboard_ttl: env_secs("WORDPACE_LEADERBOARD_TTL_SECS")
                .unwrap_or(defaults.leaderboard_ttl),
            learned_group_size: env_usize("WORDPACE_LEARNED_GROUP_SIZE")
                .unwrap_or(defaults.learned_group_size),
            learned_page_size: env_usize("WORDPACE_LEARNED_PAGE_SIZE")
                .unwrap_or(defaults.learned_page_size),
            learned_page_size_max: env_usize("WORDPACE_LEARNED_PAGE_SIZE_MAX")
                .unwrap_or(defaults.learned_page_size_max),
            leaderboard_page_size: env_usize("WORDPACE_LEADERBOARD_PAGE_SIZE")
                .unwrap_or(defaults.leaderboard_page_size),
        }
    }
}

fn env_secs(name: &str) -> Option<Duration> {
    env_parse(name).map(Duration::from_secs)
}

fn env_usize(name: &str) -> Option<usize> {
    env_parse(name)
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    match std::env::var(name) {
        Ok(raw) => match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring unparsable {}={}", name, raw);
                None
            }
        },
        Err(_) => None,
    }
}
