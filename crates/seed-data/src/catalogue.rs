//! Seed catalogue types and JSON parsing.
//!
//! The catalogue bundles every static list the app starts from, plus the
//! named seeds used to generate leaderboards. It is loaded from JSON and
//! validated once; accessors hand out borrowed slices.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogueError;
use crate::seed::{AchievementSeed, CourseSeed, DailyChallengeSeed, TestimonialSeed, UserSeed};
use crate::validation::{validate_achievements, validate_courses, validate_daily_challenge};

/// Current supported catalogue version.
const SUPPORTED_VERSION: u32 = 1;

/// Catalogue shipped with the crate.
const BUILTIN_CATALOGUE_JSON: &str = include_str!("../fixtures/catalogue.json");

/// A validated seed catalogue.
///
/// # Example
///
/// ```
/// use seed_data::SeedCatalogue;
///
/// let json = r#"{
///     "version": 1,
///     "courses": [{
///         "id": "1", "title": "Python", "description": "Basics",
///         "instructor": "i-1", "instructorName": "Dr. Sarah Johnson",
///         "thumbnail": "", "category": "Programming", "level": "beginner",
///         "duration": "40 hours", "price": 0, "rating": 4.9,
///         "studentsCount": 15420, "xpReward": 800
///     }],
///     "achievements": [{"id": "level-up", "title": "Level Up!", "description": "", "icon": "*"}],
///     "testimonials": [],
///     "dailyChallenge": {"title": "Lesson", "description": "Finish one", "xpReward": 50},
///     "mockUser": {
///         "id": "1", "name": "Alex Chen", "email": "alex@example.com", "role": "learner",
///         "xp": 2450, "level": 3, "streak": 7
///     },
///     "leaderboardSeeds": [{"name": "test", "seed": 42, "entryCount": 5}]
/// }"#;
///
/// let catalogue = SeedCatalogue::from_json(json).expect("valid catalogue");
/// assert_eq!(catalogue.courses().len(), 1);
/// assert_eq!(catalogue.mock_user().name, "Alex Chen");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SeedCatalogue {
    version: u32,
    courses: Vec<CourseSeed>,
    achievements: Vec<AchievementSeed>,
    testimonials: Vec<TestimonialSeed>,
    daily_challenge: DailyChallengeSeed,
    mock_user: UserSeed,
    leaderboard_seeds: Vec<LeaderboardSeedDefinition>,
}

impl SeedCatalogue {
    /// Parses the catalogue embedded in this crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if the embedded catalogue fails validation.
    pub fn builtin() -> Result<Self, CatalogueError> {
        Self::from_json(BUILTIN_CATALOGUE_JSON)
    }

    /// Parses a catalogue from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if:
    /// - The JSON is malformed or missing required fields
    /// - The version is unsupported
    /// - Course or achievement identifiers repeat
    /// - A rating falls outside `0..=5`
    /// - The `level-up` achievement is missing
    /// - The daily challenge awards nothing
    /// - There are no leaderboard seeds
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let raw: RawSeedCatalogue =
            serde_json::from_str(json).map_err(|e| CatalogueError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a catalogue from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, CatalogueError> {
        let contents = fs::read_to_string(path).map_err(|e| CatalogueError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedCatalogue) -> Result<Self, CatalogueError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(CatalogueError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        validate_courses(&raw.courses)?;
        validate_achievements(&raw.achievements)?;
        validate_daily_challenge(&raw.daily_challenge)?;

        if raw.leaderboard_seeds.is_empty() {
            return Err(CatalogueError::EmptyLeaderboardSeeds);
        }

        let leaderboard_seeds = raw
            .leaderboard_seeds
            .into_iter()
            .map(|s| LeaderboardSeedDefinition {
                name: s.name,
                seed: s.seed,
                entry_count: s.entry_count,
            })
            .collect();

        Ok(Self {
            version: raw.version,
            courses: raw.courses,
            achievements: raw.achievements,
            testimonials: raw.testimonials,
            daily_challenge: raw.daily_challenge,
            mock_user: raw.mock_user,
            leaderboard_seeds,
        })
    }

    /// Returns the catalogue version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the seeded courses in catalogue order.
    #[must_use]
    pub fn courses(&self) -> &[CourseSeed] {
        &self.courses
    }

    /// Returns the seeded achievements in catalogue order.
    #[must_use]
    pub fn achievements(&self) -> &[AchievementSeed] {
        &self.achievements
    }

    /// Returns the landing-page testimonials.
    #[must_use]
    pub fn testimonials(&self) -> &[TestimonialSeed] {
        &self.testimonials
    }

    /// Returns the daily challenge definition.
    #[must_use]
    pub const fn daily_challenge(&self) -> &DailyChallengeSeed {
        &self.daily_challenge
    }

    /// Returns the mock user used by simulated sign-in.
    #[must_use]
    pub const fn mock_user(&self) -> &UserSeed {
        &self.mock_user
    }

    /// Returns all leaderboard seed definitions.
    #[must_use]
    pub fn leaderboard_seeds(&self) -> &[LeaderboardSeedDefinition] {
        &self.leaderboard_seeds
    }

    /// Finds a leaderboard seed definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::SeedNotFound`] if no seed with the given
    /// name exists.
    pub fn find_leaderboard_seed(
        &self,
        name: &str,
    ) -> Result<&LeaderboardSeedDefinition, CatalogueError> {
        self.leaderboard_seeds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| CatalogueError::SeedNotFound {
                name: name.to_owned(),
            })
    }
}

/// A named seed for deterministic leaderboard generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardSeedDefinition {
    name: String,
    seed: u64,
    entry_count: usize,
}

impl LeaderboardSeedDefinition {
    /// Creates a seed definition directly, bypassing the catalogue.
    #[must_use]
    pub fn new(name: impl Into<String>, seed: u64, entry_count: usize) -> Self {
        Self {
            name: name.into(),
            seed,
            entry_count,
        }
    }

    /// Returns the seed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of leaderboard rows to generate.
    #[must_use]
    pub const fn entry_count(&self) -> usize {
        self.entry_count
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedCatalogue {
    version: u32,
    courses: Vec<CourseSeed>,
    achievements: Vec<AchievementSeed>,
    #[serde(default)]
    testimonials: Vec<TestimonialSeed>,
    daily_challenge: DailyChallengeSeed,
    mock_user: UserSeed,
    leaderboard_seeds: Vec<RawLeaderboardSeed>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLeaderboardSeed {
    name: String,
    seed: u64,
    entry_count: usize,
}
