//! Seed record types.
//!
//! These types mirror the shapes the app needs without depending on the
//! app's domain crate. Field names serialise in camelCase to match the
//! catalogue JSON.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Difficulty tier of a seeded course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultySeed {
    /// Entry-level material.
    Beginner,
    /// Assumes some prior experience.
    Intermediate,
    /// For experienced learners.
    Advanced,
}

/// Presentation kind of a seeded lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKindSeed {
    /// Video lecture.
    Video,
    /// Rendered markdown text.
    Markdown,
    /// Multiple-choice quiz.
    Quiz,
    /// Interactive coding exercise.
    Code,
}

/// Role of the seeded mock user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleSeed {
    /// Takes courses.
    Learner,
    /// Authors courses.
    Instructor,
}

/// A lesson inside a seeded course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonSeed {
    /// Lesson identifier, unique within its course.
    pub id: String,
    /// Lesson title.
    pub title: String,
    /// Presentation kind.
    #[serde(rename = "type")]
    pub kind: LessonKindSeed,
    /// Human-readable duration label, e.g. `"12 min"`.
    pub duration: String,
    /// Lesson body or media reference.
    pub content: String,
    /// Whether the lesson starts completed.
    #[serde(default)]
    pub completed: bool,
}

/// A seeded course record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSeed {
    /// Course identifier.
    pub id: String,
    /// Course title.
    pub title: String,
    /// Short marketing description.
    pub description: String,
    /// Identifier of the instructor.
    pub instructor: String,
    /// Display name of the instructor.
    pub instructor_name: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
    /// Catalogue category, e.g. `"Programming"`.
    pub category: String,
    /// Difficulty tier.
    pub level: DifficultySeed,
    /// Human-readable duration label, e.g. `"40 hours"`.
    pub duration: String,
    /// Price in whole currency units; zero means free.
    pub price: u32,
    /// Average rating between zero and five.
    pub rating: f32,
    /// Number of enrolled students.
    pub students_count: u64,
    /// Experience awarded on completion.
    pub xp_reward: u64,
    /// Ordered lessons.
    #[serde(default)]
    pub lessons: Vec<LessonSeed>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the course is promoted on browse pages.
    #[serde(default)]
    pub featured: bool,
}

/// A seeded achievement definition. Achievements always start locked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementSeed {
    /// Achievement identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// What the learner did to earn it.
    pub description: String,
    /// Icon glyph or name.
    pub icon: String,
}

/// A landing-page testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialSeed {
    /// Author name.
    pub name: String,
    /// Author role or title.
    pub role: String,
    /// Quote body.
    pub content: String,
    /// Avatar image URL.
    pub avatar: String,
    /// Star rating out of five.
    pub rating: u8,
}

/// The daily challenge shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallengeSeed {
    /// Challenge title.
    pub title: String,
    /// Challenge description.
    pub description: String,
    /// Experience awarded on completion.
    pub xp_reward: u64,
}

/// The mock user every simulated sign-in resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSeed {
    /// User identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role tag.
    pub role: RoleSeed,
    /// Optional avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Experience points.
    pub xp: u64,
    /// Stored level.
    pub level: u64,
    /// Consecutive learning days.
    pub streak: u32,
    /// Earned badge identifiers.
    #[serde(default)]
    pub badges: Vec<String>,
    /// Enrolled course identifiers.
    #[serde(default)]
    pub enrolled_courses: Vec<String>,
    /// Authored course identifiers.
    #[serde(default)]
    pub created_courses: Vec<String>,
}

/// A generated leaderboard row.
///
/// # Example
///
/// ```
/// use seed_data::LeaderboardEntrySeed;
/// use uuid::Uuid;
///
/// let entry = LeaderboardEntrySeed {
///     id: Uuid::nil(),
///     rank: 1,
///     name: "Ada Lovelace".to_owned(),
///     xp: 12_400,
///     level: 13,
///     streak: 21,
/// };
///
/// assert_eq!(entry.rank, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntrySeed {
    /// Deterministic identifier.
    pub id: Uuid,
    /// One-based position on the board.
    pub rank: u32,
    /// Learner display name.
    pub name: String,
    /// Experience points.
    pub xp: u64,
    /// Level derived from experience.
    pub level: u64,
    /// Consecutive learning days.
    pub streak: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_kind_reads_type_field() {
        let json = r#"{
            "id": "l1",
            "title": "Intro",
            "type": "quiz",
            "duration": "5 min",
            "content": "..."
        }"#;
        let lesson: LessonSeed = serde_json::from_str(json).expect("lesson parses");
        assert_eq!(lesson.kind, LessonKindSeed::Quiz);
        assert!(!lesson.completed);
    }

    #[test]
    fn user_seed_serializes_to_camel_case() {
        let user = UserSeed {
            id: "1".to_owned(),
            name: "Test".to_owned(),
            email: "test@example.com".to_owned(),
            role: RoleSeed::Learner,
            avatar: None,
            xp: 0,
            level: 1,
            streak: 0,
            badges: vec![],
            enrolled_courses: vec![],
            created_courses: vec![],
        };
        let json = serde_json::to_string(&user).expect("serialize");
        assert!(json.contains("enrolledCourses"));
        assert!(json.contains("createdCourses"));
        assert!(json.contains("\"role\":\"learner\""));
    }
}
