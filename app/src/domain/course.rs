//! Course and lesson records.
//!
//! Courses are immutable catalogue entries; the store only ever replaces the
//! whole list or points at one as the current selection.

use seed_data::{CourseSeed, DifficultySeed, LessonKindSeed, LessonSeed};
use serde::{Deserialize, Serialize};

/// Difficulty tier of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Entry-level material.
    Beginner,
    /// Assumes some prior experience.
    Intermediate,
    /// For experienced learners.
    Advanced,
}

impl Difficulty {
    /// Every tier in ascending order.
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Capitalised label shown in filters.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl From<DifficultySeed> for Difficulty {
    fn from(value: DifficultySeed) -> Self {
        match value {
            DifficultySeed::Beginner => Self::Beginner,
            DifficultySeed::Intermediate => Self::Intermediate,
            DifficultySeed::Advanced => Self::Advanced,
        }
    }
}

/// Presentation kind of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    /// Video lecture.
    Video,
    /// Rendered markdown text.
    Markdown,
    /// Multiple-choice quiz.
    Quiz,
    /// Interactive coding exercise.
    Code,
}

impl From<LessonKindSeed> for LessonKind {
    fn from(value: LessonKindSeed) -> Self {
        match value {
            LessonKindSeed::Video => Self::Video,
            LessonKindSeed::Markdown => Self::Markdown,
            LessonKindSeed::Quiz => Self::Quiz,
            LessonKindSeed::Code => Self::Code,
        }
    }
}

/// A single lesson inside a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Lesson identifier.
    pub id: String,
    /// Lesson title.
    pub title: String,
    /// Presentation kind.
    #[serde(rename = "type")]
    pub kind: LessonKind,
    /// Duration label.
    pub duration: String,
    /// Body or media reference.
    pub content: String,
    /// Whether the lesson is complete.
    pub completed: bool,
}

impl From<&LessonSeed> for Lesson {
    fn from(seed: &LessonSeed) -> Self {
        Self {
            id: seed.id.clone(),
            title: seed.title.clone(),
            kind: seed.kind.into(),
            duration: seed.duration.clone(),
            content: seed.content.clone(),
            completed: seed.completed,
        }
    }
}

/// A catalogue course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course identifier.
    pub id: String,
    /// Course title.
    pub title: String,
    /// Marketing description.
    pub description: String,
    /// Instructor identifier.
    pub instructor: String,
    /// Instructor display name.
    pub instructor_name: String,
    /// Thumbnail URL.
    pub thumbnail: String,
    /// Category label.
    pub category: String,
    /// Difficulty tier.
    pub level: Difficulty,
    /// Duration label.
    pub duration: String,
    /// Price in whole currency units; zero means free.
    pub price: u32,
    /// Average rating out of five.
    pub rating: f32,
    /// Enrolled student count.
    pub students_count: u64,
    /// Experience awarded on completion.
    pub xp_reward: u64,
    /// Ordered lessons.
    pub lessons: Vec<Lesson>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Promoted on browse pages.
    #[serde(default)]
    pub featured: bool,
}

impl Course {
    /// Returns `true` for free courses.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.price == 0
    }
}

impl From<&CourseSeed> for Course {
    fn from(seed: &CourseSeed) -> Self {
        Self {
            id: seed.id.clone(),
            title: seed.title.clone(),
            description: seed.description.clone(),
            instructor: seed.instructor.clone(),
            instructor_name: seed.instructor_name.clone(),
            thumbnail: seed.thumbnail.clone(),
            category: seed.category.clone(),
            level: seed.level.into(),
            duration: seed.duration.clone(),
            price: seed.price,
            rating: seed.rating,
            students_count: seed.students_count,
            xp_reward: seed.xp_reward,
            lessons: seed.lessons.iter().map(Lesson::from).collect(),
            tags: seed.tags.clone(),
            featured: seed.featured,
        }
    }
}
