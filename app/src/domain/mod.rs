//! Domain primitives, the state container, and the UI flows built on it.
//!
//! Purpose: model the Beam client state and the rules behind each screen
//! without any rendering. Records are plain serde types; flows mutate the
//! [`Store`] through its named operations only.
//!
//! Public surface:
//! - Store (alias to `store::Store`): the application state container.
//! - AppState (alias to `store::AppState`): the in-memory record.
//! - PersistedState (alias to `persisted::PersistedState`): the slot payload.
//! - Error (alias to `error::DomainError`): failure reported by ports.
//! - ports: service and repository traits with fixture adapters.
//! - signup: role wizards and the register form.

pub mod auth;
pub mod catalogue;
pub mod countdown;
pub mod dashboard;
pub mod error;
pub mod landing;
pub mod onboarding;
pub mod password_reset;
pub mod ports;
pub mod seed;
pub mod signup;
pub mod store;
pub mod verification;

mod achievement;
mod chat;
mod course;
mod daily_challenge;
mod leaderboard;
mod page;
mod persisted;
mod preferences;
mod user;

pub use self::achievement::Achievement;
pub use self::auth::{
    EmailAddress, LoginCredentials, LoginValidationError, ParseSocialProviderError,
    SocialProvider, sign_in, sign_in_with_provider, sign_out,
};
pub use self::catalogue::{CourseQuery, LikedCourses, SortOrder, featured};
pub use self::chat::{ChatMessage, NewChatMessage, Sender};
pub use self::countdown::Countdown;
pub use self::course::{Course, Difficulty, Lesson, LessonKind};
pub use self::daily_challenge::DailyChallenge;
pub use self::dashboard::{Dashboard, LearnerSummary};
pub use self::error::{DomainError as Error, ErrorCode};
pub use self::landing::{TESTIMONIAL_ROTATION, Testimonial, TestimonialCarousel};
pub use self::leaderboard::LeaderboardEntry;
pub use self::onboarding::{Onboarding, OnboardingProgress, OnboardingStep, TimeCommitment};
pub use self::page::{Page, PageParseError};
pub use self::password_reset::{PasswordResetError, PasswordResetFlow};
pub use self::persisted::{DEFAULT_SLOT_NAME, PersistedState, SNAPSHOT_VERSION};
pub use self::preferences::{ColorScheme, ParsePreferenceError, Theme};
pub use self::seed::{DEFAULT_LEADERBOARD_SEED, SeedBundle, SeedBundleError};
pub use self::signup::RegistrationRequest;
pub use self::store::{Action, AppState, Outcome, SkipReason, Store};
pub use self::user::{Role, User, XP_PER_LEVEL, level_for_xp};
pub use self::verification::{EmailVerification, VerificationError, VerificationStatus};
