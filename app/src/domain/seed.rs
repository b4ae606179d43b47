//! Startup data the store is built from.
//!
//! The seed catalogue is independent of this crate's types; [`SeedBundle`]
//! converts it once so the store never sees raw seed records.

use seed_data::{CatalogueError, GenerationError, SeedCatalogue, generate_leaderboard};

use super::{Achievement, Course, DailyChallenge, LeaderboardEntry, Testimonial, User};

/// Leaderboard seed used when none is configured.
pub const DEFAULT_LEADERBOARD_SEED: &str = "golden-lantern";

/// Errors raised while assembling a [`SeedBundle`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedBundleError {
    /// The catalogue could not be loaded or lacks the named seed.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
    /// The leaderboard could not be generated.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Converted seed lists handed to the store at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedBundle {
    /// User every simulated sign-in resolves to.
    pub mock_user: User,
    /// Catalogue courses in seed order.
    pub courses: Vec<Course>,
    /// Achievements, all locked.
    pub achievements: Vec<Achievement>,
    /// Today's challenge, if any.
    pub daily_challenge: Option<DailyChallenge>,
    /// Landing page quotes.
    pub testimonials: Vec<Testimonial>,
    /// Ranked learners.
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl SeedBundle {
    /// Convert `catalogue`, generating the leaderboard from the seed named
    /// `leaderboard_seed`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedBundleError::Catalogue`] if the seed is unknown and
    /// [`SeedBundleError::Generation`] if generation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use beam::domain::SeedBundle;
    /// use seed_data::SeedCatalogue;
    ///
    /// let catalogue = SeedCatalogue::builtin().expect("built-in catalogue");
    /// let bundle = SeedBundle::from_catalogue(&catalogue, "quiet-heron").expect("bundle");
    /// assert_eq!(bundle.leaderboard.len(), 25);
    /// assert!(bundle.achievements.iter().all(|a| !a.unlocked));
    /// ```
    pub fn from_catalogue(
        catalogue: &SeedCatalogue,
        leaderboard_seed: &str,
    ) -> Result<Self, SeedBundleError> {
        let seed_def = catalogue.find_leaderboard_seed(leaderboard_seed)?;
        let leaderboard = generate_leaderboard(seed_def)?
            .into_iter()
            .map(LeaderboardEntry::from)
            .collect();

        Ok(Self {
            mock_user: User::from(catalogue.mock_user()),
            courses: catalogue.courses().iter().map(Course::from).collect(),
            achievements: catalogue.achievements().iter().map(Achievement::from).collect(),
            daily_challenge: Some(DailyChallenge::from(catalogue.daily_challenge())),
            testimonials: catalogue.testimonials().iter().map(Testimonial::from).collect(),
            leaderboard,
        })
    }

    /// Bundle built from the embedded catalogue and the default seed.
    ///
    /// # Errors
    ///
    /// Returns a [`SeedBundleError`] if the embedded catalogue is invalid.
    pub fn builtin() -> Result<Self, SeedBundleError> {
        let catalogue = SeedCatalogue::builtin()?;
        Self::from_catalogue(&catalogue, DEFAULT_LEADERBOARD_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_leaderboard_seed_is_reported() {
        let catalogue = SeedCatalogue::builtin().expect("built-in catalogue");
        let err = SeedBundle::from_catalogue(&catalogue, "missing").expect_err("unknown seed");
        assert_eq!(
            err,
            SeedBundleError::Catalogue(CatalogueError::SeedNotFound {
                name: "missing".to_owned()
            })
        );
    }

    #[test]
    fn builtin_bundle_uses_the_default_seed() {
        let bundle = SeedBundle::builtin().expect("bundle");
        assert_eq!(bundle.leaderboard.len(), 10);
        assert_eq!(bundle.mock_user.name, "Alex Chen");
        assert!(bundle.daily_challenge.is_some_and(|c| !c.completed));
    }
}
