//! Achievements and their one-way unlock transition.

use chrono::{DateTime, Utc};
use seed_data::AchievementSeed;
use serde::{Deserialize, Serialize};

/// An achievement a learner can unlock once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Achievement identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// What earns it.
    pub description: String,
    /// Icon glyph.
    pub icon: String,
    /// Whether it has been unlocked.
    pub unlocked: bool,
    /// When it was unlocked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    /// Flips the achievement to unlocked at `at`.
    ///
    /// Returns `false` and leaves the record untouched if it was already
    /// unlocked.
    ///
    /// # Examples
    ///
    /// ```
    /// use beam::domain::Achievement;
    /// use chrono::Utc;
    ///
    /// let mut achievement = Achievement {
    ///     id: "level-up".to_owned(),
    ///     title: "Level Up!".to_owned(),
    ///     description: String::new(),
    ///     icon: "*".to_owned(),
    ///     unlocked: false,
    ///     unlocked_at: None,
    /// };
    /// assert!(achievement.unlock(Utc::now()));
    /// assert!(!achievement.unlock(Utc::now()));
    /// ```
    pub fn unlock(&mut self, at: DateTime<Utc>) -> bool {
        if self.unlocked {
            return false;
        }
        self.unlocked = true;
        self.unlocked_at = Some(at);
        true
    }
}

impl From<&AchievementSeed> for Achievement {
    fn from(seed: &AchievementSeed) -> Self {
        Self {
            id: seed.id.clone(),
            title: seed.title.clone(),
            description: seed.description.clone(),
            icon: seed.icon.clone(),
            unlocked: false,
            unlocked_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn second_unlock_keeps_first_timestamp() {
        let mut achievement = Achievement::from(&AchievementSeed {
            id: "night-owl".to_owned(),
            title: "Night Owl".to_owned(),
            description: String::new(),
            icon: "*".to_owned(),
        });
        let first = Utc.with_ymd_and_hms(2026, 3, 1, 23, 59, 0).single().expect("valid");
        let later = Utc.with_ymd_and_hms(2026, 3, 2, 0, 1, 0).single().expect("valid");

        assert!(!achievement.unlocked);
        assert!(achievement.unlock(first));
        assert!(!achievement.unlock(later));
        assert_eq!(achievement.unlocked_at, Some(first));
    }
}
