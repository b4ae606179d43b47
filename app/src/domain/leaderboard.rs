//! Leaderboard rows shown on the dashboards.

use seed_data::LeaderboardEntrySeed;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One ranked learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Stable identifier.
    pub id: Uuid,
    /// One-based rank.
    pub rank: u32,
    /// Display name.
    pub name: String,
    /// Experience points.
    pub xp: u64,
    /// Level.
    pub level: u64,
    /// Streak in days.
    pub streak: u32,
}

impl From<LeaderboardEntrySeed> for LeaderboardEntry {
    fn from(seed: LeaderboardEntrySeed) -> Self {
        Self {
            id: seed.id,
            rank: seed.rank,
            name: seed.name,
            xp: seed.xp,
            level: seed.level,
            streak: seed.streak,
        }
    }
}
