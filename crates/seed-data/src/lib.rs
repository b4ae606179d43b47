//! Static seed data for the Beam learning app.
//!
//! This crate owns the mock catalogue the app is built around: courses with
//! their lessons, achievements, testimonials, the daily challenge, and the
//! signed-in mock user. It also generates a believable, reproducible
//! leaderboard from named seeds. It is independent of the app's domain types;
//! the app converts seed records at the point of use.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading catalogues from JSON strings or files
//! - A built-in catalogue embedded at compile time
//! - Validation of identifiers, ratings, and required achievements
//! - Deterministic leaderboard generation using named seeds
//!
//! # Example
//!
//! ```
//! use seed_data::{SeedCatalogue, generate_leaderboard};
//!
//! let catalogue = SeedCatalogue::builtin().expect("built-in catalogue is valid");
//! let seed_def = catalogue.find_leaderboard_seed("golden-lantern").expect("seed exists");
//! let board = generate_leaderboard(seed_def).expect("generation succeeds");
//!
//! assert_eq!(board.len(), seed_def.entry_count());
//! assert!(catalogue.courses().len() >= 6);
//! ```

mod catalogue;
mod error;
mod leaderboard;
mod seed;
mod validation;

pub use catalogue::{LeaderboardSeedDefinition, SeedCatalogue};
pub use error::{CatalogueError, GenerationError};
pub use leaderboard::generate_leaderboard;
pub use seed::{
    AchievementSeed, CourseSeed, DailyChallengeSeed, DifficultySeed, LeaderboardEntrySeed,
    LessonKindSeed, LessonSeed, RoleSeed, TestimonialSeed, UserSeed,
};
pub use validation::{LEVEL_UP_ACHIEVEMENT_ID, MAX_RATING, is_valid_rating};
