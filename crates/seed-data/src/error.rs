//! Error types for the seed-data crate.
//!
//! Catalogue errors cover reading, parsing, and validating the JSON
//! catalogue. Generation errors cover the deterministic leaderboard.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or querying a seed catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// The catalogue file could not be read.
    #[error("failed to read catalogue file at '{path}': {message}")]
    IoError {
        /// Path to the catalogue file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The catalogue JSON is malformed or missing required fields.
    #[error("invalid catalogue JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The catalogue version is not supported.
    #[error("unsupported catalogue version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the catalogue.
        actual: u32,
    },

    /// The catalogue contains no courses.
    #[error("catalogue contains no courses")]
    EmptyCourses,

    /// Two courses share an identifier.
    #[error("duplicate course id '{id}'")]
    DuplicateCourseId {
        /// The repeated identifier.
        id: String,
    },

    /// Two achievements share an identifier.
    #[error("duplicate achievement id '{id}'")]
    DuplicateAchievementId {
        /// The repeated identifier.
        id: String,
    },

    /// The achievement unlocked on level-up is missing.
    #[error("catalogue must define the '{id}' achievement")]
    MissingLevelUpAchievement {
        /// Identifier that was expected.
        id: String,
    },

    /// A course rating is outside the accepted range.
    #[error("course '{course_id}' has rating {rating} outside 0..=5")]
    RatingOutOfRange {
        /// Course carrying the bad rating.
        course_id: String,
        /// The rating as written in the catalogue.
        rating: String,
    },

    /// The daily challenge awards no experience.
    #[error("daily challenge must award a positive XP reward")]
    InvalidDailyChallengeReward,

    /// The catalogue contains no leaderboard seed definitions.
    #[error("catalogue contains no leaderboard seeds")]
    EmptyLeaderboardSeeds,

    /// The requested leaderboard seed was not found.
    #[error("leaderboard seed '{name}' not found in catalogue")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// Errors that can occur while generating a leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to generate a usable learner name after maximum retries.
    #[error("failed to generate a learner name after {max_attempts} attempts")]
    NameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        CatalogueError::IoError {
            path: PathBuf::from("/tmp/catalogue.json"),
            message: "file not found".to_owned(),
        },
        "failed to read catalogue file at '/tmp/catalogue.json': file not found"
    )]
    #[case(
        CatalogueError::UnsupportedVersion { expected: 1, actual: 3 },
        "unsupported catalogue version: expected 1, found 3"
    )]
    #[case(
        CatalogueError::DuplicateCourseId { id: "7".to_owned() },
        "duplicate course id '7'"
    )]
    #[case(
        CatalogueError::RatingOutOfRange {
            course_id: "2".to_owned(),
            rating: "5.5".to_owned(),
        },
        "course '2' has rating 5.5 outside 0..=5"
    )]
    #[case(
        CatalogueError::SeedNotFound { name: "quiet-heron".to_owned() },
        "leaderboard seed 'quiet-heron' not found in catalogue"
    )]
    fn catalogue_errors_format(#[case] err: CatalogueError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn generation_error_formats_correctly() {
        let err = GenerationError::NameGenerationFailed { max_attempts: 100 };
        assert_eq!(
            err.to_string(),
            "failed to generate a learner name after 100 attempts"
        );
    }
}
