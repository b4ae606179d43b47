//! The daily challenge shown on the dashboard.

use seed_data::DailyChallengeSeed;
use serde::{Deserialize, Serialize};

/// A one-off challenge that awards experience when completed.
///
/// Completion is a single flag; nothing resets it at a day boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallenge {
    /// Challenge title.
    pub title: String,
    /// Challenge description.
    pub description: String,
    /// Experience awarded on completion.
    pub xp_reward: u64,
    /// Whether it has been completed.
    pub completed: bool,
}

impl From<&DailyChallengeSeed> for DailyChallenge {
    fn from(seed: &DailyChallengeSeed) -> Self {
        Self {
            title: seed.title.clone(),
            description: seed.description.clone(),
            xp_reward: seed.xp_reward,
            completed: false,
        }
    }
}
