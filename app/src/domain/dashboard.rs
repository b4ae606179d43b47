//! Read-only summaries behind the dashboard pages.

use super::store::AppState;
use super::{Course, LeaderboardEntry, User, XP_PER_LEVEL};

/// Name used in the greeting when nobody is signed in.
pub const FALLBACK_FIRST_NAME: &str = "Learner";

/// Courses shown under "continue learning".
pub const RECENT_COURSE_COUNT: usize = 3;

/// Rows shown in the leaderboard widget.
pub const TOP_LEARNER_COUNT: usize = 5;

/// Headline numbers for the signed-in learner.
///
/// # Examples
///
/// ```
/// use beam::domain::LearnerSummary;
///
/// let summary = LearnerSummary::from_user(None);
/// assert_eq!(summary.first_name, "Learner");
/// assert_eq!(summary.level, 1);
/// assert_eq!(summary.xp_to_next, 1_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnerSummary {
    /// Greeting name.
    pub first_name: String,
    /// Stored level, or 1 when signed out.
    pub level: u64,
    /// Total experience.
    pub xp: u64,
    /// Experience earned since the last level boundary.
    pub xp_into_level: u64,
    /// Experience still needed for the next level.
    pub xp_to_next: u64,
    /// Whole-number percentage through the current level.
    pub progress_percent: u64,
    /// Streak in days.
    pub streak: u32,
    /// Number of enrolled courses.
    pub enrolled_count: usize,
}

impl LearnerSummary {
    /// Summarise `user`, or an empty learner when signed out.
    #[must_use]
    pub fn from_user(user: Option<&User>) -> Self {
        let xp = user.map_or(0, |u| u.xp);
        let xp_into_level = xp.rem_euclid(XP_PER_LEVEL);
        Self {
            first_name: user
                .and_then(User::first_name)
                .unwrap_or(FALLBACK_FIRST_NAME)
                .to_owned(),
            level: user.map_or(1, |u| u.level),
            xp,
            xp_into_level,
            xp_to_next: XP_PER_LEVEL - xp_into_level,
            progress_percent: xp_into_level.div_euclid(XP_PER_LEVEL.div_euclid(100)),
            streak: user.map_or(0, |u| u.streak),
            enrolled_count: user.map_or(0, |u| u.enrolled_courses.len()),
        }
    }
}

/// Everything the dashboard page shows, borrowed from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard<'a> {
    /// Learner headline numbers.
    pub summary: LearnerSummary,
    /// First few catalogue courses.
    pub recent_courses: &'a [Course],
    /// Top of the leaderboard.
    pub top_learners: &'a [LeaderboardEntry],
}

impl<'a> Dashboard<'a> {
    /// Build the dashboard for the current state.
    #[must_use]
    pub fn from_state(state: &'a AppState) -> Self {
        Self {
            summary: LearnerSummary::from_user(state.user.as_ref()),
            recent_courses: head(&state.courses, RECENT_COURSE_COUNT),
            top_learners: head(&state.leaderboard, TOP_LEARNER_COUNT),
        }
    }
}

fn head<T>(items: &[T], count: usize) -> &[T] {
    items.get(..count.min(items.len())).unwrap_or_default()
}
