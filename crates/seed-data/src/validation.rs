//! Catalogue validation rules.
//!
//! The app relies on a few catalogue guarantees: course and achievement
//! identifiers are unique, ratings fit a five-star scale, and the
//! achievement unlocked on level-up exists.

use std::collections::HashSet;

use crate::error::CatalogueError;
use crate::seed::{AchievementSeed, CourseSeed, DailyChallengeSeed};

/// Identifier of the achievement unlocked whenever a learner levels up.
pub const LEVEL_UP_ACHIEVEMENT_ID: &str = "level-up";

/// Highest accepted course rating.
pub const MAX_RATING: f32 = 5.0;

/// Returns `true` if a rating fits the five-star scale.
///
/// # Examples
///
/// ```
/// use seed_data::is_valid_rating;
///
/// assert!(is_valid_rating(4.9));
/// assert!(is_valid_rating(0.0));
/// assert!(!is_valid_rating(5.1));
/// assert!(!is_valid_rating(f32::NAN));
/// ```
#[must_use]
pub fn is_valid_rating(rating: f32) -> bool {
    (0.0..=MAX_RATING).contains(&rating)
}

pub(crate) fn validate_courses(courses: &[CourseSeed]) -> Result<(), CatalogueError> {
    if courses.is_empty() {
        return Err(CatalogueError::EmptyCourses);
    }

    let mut seen = HashSet::with_capacity(courses.len());
    for course in courses {
        if !seen.insert(course.id.as_str()) {
            return Err(CatalogueError::DuplicateCourseId {
                id: course.id.clone(),
            });
        }
        if !is_valid_rating(course.rating) {
            return Err(CatalogueError::RatingOutOfRange {
                course_id: course.id.clone(),
                rating: course.rating.to_string(),
            });
        }
    }
    Ok(())
}

pub(crate) fn validate_achievements(achievements: &[AchievementSeed]) -> Result<(), CatalogueError> {
    let mut seen = HashSet::with_capacity(achievements.len());
    for achievement in achievements {
        if !seen.insert(achievement.id.as_str()) {
            return Err(CatalogueError::DuplicateAchievementId {
                id: achievement.id.clone(),
            });
        }
    }

    if !seen.contains(LEVEL_UP_ACHIEVEMENT_ID) {
        return Err(CatalogueError::MissingLevelUpAchievement {
            id: LEVEL_UP_ACHIEVEMENT_ID.to_owned(),
        });
    }
    Ok(())
}

pub(crate) const fn validate_daily_challenge(
    challenge: &DailyChallengeSeed,
) -> Result<(), CatalogueError> {
    if challenge.xp_reward == 0 {
        return Err(CatalogueError::InvalidDailyChallengeReward);
    }
    Ok(())
}
