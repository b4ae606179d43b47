//! The application state container.
//!
//! [`Store`] owns one [`AppState`] record and exposes a named mutator per
//! UI event. After every mutator the four persisted fields are mirrored
//! into the snapshot slot. Operations never fail: a missing precondition
//! leaves the state untouched and is reported as [`Outcome::Skipped`].
//!
//! The same operations are available in reducer form through [`Action`]
//! and [`Store::dispatch`].

use std::sync::Arc;

use mockable::Clock;
use seed_data::LEVEL_UP_ACHIEVEMENT_ID;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::ports::StateSnapshotRepository;
use super::{
    Achievement, ChatMessage, ColorScheme, Course, DailyChallenge, LeaderboardEntry,
    NewChatMessage, Page, PersistedState, SeedBundle, Testimonial, Theme, User, level_for_xp,
};

/// In-memory UI and session state.
///
/// Only `theme`, `color_scheme`, `user`, and `is_authenticated` survive a
/// restart; everything else starts from the seed bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Selected theme.
    pub theme: Theme,
    /// Selected colour scheme.
    pub color_scheme: ColorScheme,
    /// Signed-in user.
    pub user: Option<User>,
    /// Whether a user is signed in.
    pub is_authenticated: bool,
    /// User every simulated sign-in resolves to.
    pub mock_user: User,
    /// Screen currently shown.
    pub current_page: Page,
    /// Whether the sidebar is expanded.
    pub sidebar_open: bool,
    /// Course catalogue.
    pub courses: Vec<Course>,
    /// Course opened in the player.
    pub selected_course: Option<Course>,
    /// AI tutor conversation, oldest first.
    pub chat_messages: Vec<ChatMessage>,
    /// Whether the AI tutor is composing a reply.
    pub is_ai_typing: bool,
    /// Achievement catalogue with unlock state.
    pub achievements: Vec<Achievement>,
    /// Whether the unlock modal is showing.
    pub show_achievement_modal: bool,
    /// The most recent unlock, kept until the modal is dismissed.
    pub new_achievement: Option<Achievement>,
    /// Today's challenge.
    pub daily_challenge: Option<DailyChallenge>,
    /// Landing page quotes.
    pub testimonials: Vec<Testimonial>,
    /// Ranked learners.
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl AppState {
    /// State built from `seed` with `persisted` applied on top.
    #[must_use]
    pub fn from_parts(seed: SeedBundle, persisted: PersistedState) -> Self {
        let SeedBundle {
            mock_user,
            courses,
            achievements,
            daily_challenge,
            testimonials,
            leaderboard,
        } = seed;
        Self {
            theme: persisted.theme,
            color_scheme: persisted.color_scheme,
            user: persisted.user,
            is_authenticated: persisted.is_authenticated,
            mock_user,
            current_page: Page::default(),
            sidebar_open: false,
            courses,
            selected_course: None,
            chat_messages: Vec::new(),
            is_ai_typing: false,
            achievements,
            show_achievement_modal: false,
            new_achievement: None,
            daily_challenge,
            testimonials,
            leaderboard,
        }
    }

    /// The persisted subset of this state.
    #[must_use]
    pub fn persisted(&self) -> PersistedState {
        PersistedState {
            theme: self.theme,
            color_scheme: self.color_scheme,
            user: self.user.clone(),
            is_authenticated: self.is_authenticated,
        }
    }

    /// Achievement with `id`, if the catalogue has one.
    #[must_use]
    pub fn achievement(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|achievement| achievement.id == id)
    }
}

/// Why an operation left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The operation needs a signed-in user.
    NoUser,
    /// No achievement has the requested identifier.
    UnknownAchievement,
    /// The achievement was unlocked earlier.
    AlreadyUnlocked,
    /// The user is already enrolled in the course.
    AlreadyEnrolled,
    /// There is no daily challenge.
    NoDailyChallenge,
    /// The daily challenge was completed earlier.
    ChallengeAlreadyCompleted,
}

impl SkipReason {
    /// Short description used in logs and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoUser => "no signed-in user",
            Self::UnknownAchievement => "unknown achievement",
            Self::AlreadyUnlocked => "achievement already unlocked",
            Self::AlreadyEnrolled => "already enrolled",
            Self::NoDailyChallenge => "no daily challenge",
            Self::ChallengeAlreadyCompleted => "daily challenge already completed",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The state changed as requested.
    Applied,
    /// Nothing changed.
    Skipped(SkipReason),
}

impl Outcome {
    /// Returns `true` for [`Outcome::Applied`].
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// A store mutation in reducer form.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the theme.
    SetTheme(Theme),
    /// Replace the colour scheme.
    SetColorScheme(ColorScheme),
    /// Replace or clear the signed-in user.
    SetUser(Option<User>),
    /// Show another page.
    SetCurrentPage(Page),
    /// Flip the sidebar.
    ToggleSidebar,
    /// Open or close the sidebar.
    SetSidebarOpen(bool),
    /// Replace or clear the selected course.
    SetSelectedCourse(Option<Course>),
    /// Append a chat message.
    AddChatMessage(NewChatMessage),
    /// Set the AI typing indicator.
    SetAiTyping(bool),
    /// Unlock the achievement with this identifier.
    UnlockAchievement(String),
    /// Dismiss the unlock modal.
    CloseAchievementModal,
    /// Award experience to the signed-in user.
    AddXp(u64),
    /// Complete the daily challenge.
    CompleteDailyChallenge,
    /// Enrol the signed-in user in this course.
    EnrollInCourse(String),
}

/// Explicitly constructed state container.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use beam::domain::ports::FixtureSnapshotRepository;
/// use beam::domain::{Outcome, SeedBundle, Store, Theme};
/// use mockable::DefaultClock;
///
/// let slot = FixtureSnapshotRepository::default();
/// let mut store = Store::new(
///     SeedBundle::builtin().expect("seed"),
///     Arc::new(slot.clone()),
///     Arc::new(DefaultClock),
/// );
///
/// assert_eq!(store.set_theme(Theme::Dark), Outcome::Applied);
/// assert!(slot.contents().expect("written").contains("\"theme\":\"dark\""));
/// ```
pub struct Store<R: StateSnapshotRepository + ?Sized> {
    state: AppState,
    snapshots: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: StateSnapshotRepository + ?Sized> std::fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<R: StateSnapshotRepository + ?Sized> Store<R> {
    /// Build a store from `seed`, rehydrating the persisted fields from
    /// `snapshots`.
    ///
    /// The slot is read exactly once. A missing slot yields defaults; an
    /// unreadable one is logged and also yields defaults.
    #[must_use]
    pub fn new(seed: SeedBundle, snapshots: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        let persisted = snapshots
            .load()
            .unwrap_or_else(|err| {
                warn!(error = %err, "snapshot slot unreadable; starting from defaults");
                None
            })
            .unwrap_or_default();
        Self {
            state: AppState::from_parts(seed, persisted),
            snapshots,
            clock,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Replace the theme.
    pub fn set_theme(&mut self, theme: Theme) -> Outcome {
        self.state.theme = theme;
        self.commit(Outcome::Applied)
    }

    /// Replace the colour scheme.
    pub fn set_color_scheme(&mut self, color_scheme: ColorScheme) -> Outcome {
        self.state.color_scheme = color_scheme;
        self.commit(Outcome::Applied)
    }

    /// Replace or clear the signed-in user and recompute the
    /// authentication flag.
    pub fn set_user(&mut self, user: Option<User>) -> Outcome {
        self.state.is_authenticated = user.is_some();
        self.state.user = user;
        debug!(authenticated = self.state.is_authenticated, "user replaced");
        self.commit(Outcome::Applied)
    }

    /// Show `page`.
    pub fn set_current_page(&mut self, page: Page) -> Outcome {
        self.state.current_page = page;
        self.commit(Outcome::Applied)
    }

    /// Flip the sidebar.
    pub fn toggle_sidebar(&mut self) -> Outcome {
        self.state.sidebar_open = !self.state.sidebar_open;
        self.commit(Outcome::Applied)
    }

    /// Open or close the sidebar.
    pub fn set_sidebar_open(&mut self, open: bool) -> Outcome {
        self.state.sidebar_open = open;
        self.commit(Outcome::Applied)
    }

    /// Replace or clear the selected course.
    pub fn set_selected_course(&mut self, course: Option<Course>) -> Outcome {
        self.state.selected_course = course;
        self.commit(Outcome::Applied)
    }

    /// Append a chat message stamped with a fresh id and the current time.
    pub fn add_chat_message(&mut self, message: NewChatMessage) -> Outcome {
        let stamped = message.stamp(Uuid::new_v4(), self.clock.utc());
        self.state.chat_messages.push(stamped);
        self.commit(Outcome::Applied)
    }

    /// Set the AI typing indicator.
    pub fn set_ai_typing(&mut self, typing: bool) -> Outcome {
        self.state.is_ai_typing = typing;
        self.commit(Outcome::Applied)
    }

    /// Unlock the achievement `id` and raise the unlock modal.
    ///
    /// Unknown or already unlocked achievements are skipped and the modal is
    /// not raised again.
    pub fn unlock_achievement(&mut self, id: &str) -> Outcome {
        let outcome = self.apply_unlock(id);
        self.commit(outcome)
    }

    /// Dismiss the unlock modal and forget the recent unlock.
    pub fn close_achievement_modal(&mut self) -> Outcome {
        self.state.show_achievement_modal = false;
        self.state.new_achievement = None;
        self.commit(Outcome::Applied)
    }

    /// Award `amount` experience to the signed-in user.
    ///
    /// The level is recomputed; crossing into a higher level unlocks the
    /// `level-up` achievement.
    pub fn add_xp(&mut self, amount: u64) -> Outcome {
        let outcome = self.apply_xp(amount);
        self.commit(outcome)
    }

    /// Mark the daily challenge completed and award its experience.
    ///
    /// The challenge is marked completed even when nobody is signed in to
    /// receive the award.
    pub fn complete_daily_challenge(&mut self) -> Outcome {
        let outcome = match self.state.daily_challenge.as_mut() {
            None => Outcome::Skipped(SkipReason::NoDailyChallenge),
            Some(challenge) if challenge.completed => {
                Outcome::Skipped(SkipReason::ChallengeAlreadyCompleted)
            }
            Some(challenge) => {
                challenge.completed = true;
                let reward = challenge.xp_reward;
                self.apply_xp(reward);
                Outcome::Applied
            }
        };
        self.commit(outcome)
    }

    /// Enrol the signed-in user in `course_id`.
    ///
    /// The identifier is not checked against the catalogue.
    pub fn enroll_in_course(&mut self, course_id: &str) -> Outcome {
        let outcome = match self.state.user.as_mut() {
            None => Outcome::Skipped(SkipReason::NoUser),
            Some(user) if user.is_enrolled(course_id) => {
                Outcome::Skipped(SkipReason::AlreadyEnrolled)
            }
            Some(user) => {
                user.enrolled_courses.push(course_id.to_owned());
                Outcome::Applied
            }
        };
        self.commit(outcome)
    }

    /// Apply one [`Action`].
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        match action {
            Action::SetTheme(theme) => self.set_theme(theme),
            Action::SetColorScheme(scheme) => self.set_color_scheme(scheme),
            Action::SetUser(user) => self.set_user(user),
            Action::SetCurrentPage(page) => self.set_current_page(page),
            Action::ToggleSidebar => self.toggle_sidebar(),
            Action::SetSidebarOpen(open) => self.set_sidebar_open(open),
            Action::SetSelectedCourse(course) => self.set_selected_course(course),
            Action::AddChatMessage(message) => self.add_chat_message(message),
            Action::SetAiTyping(typing) => self.set_ai_typing(typing),
            Action::UnlockAchievement(id) => self.unlock_achievement(&id),
            Action::CloseAchievementModal => self.close_achievement_modal(),
            Action::AddXp(amount) => self.add_xp(amount),
            Action::CompleteDailyChallenge => self.complete_daily_challenge(),
            Action::EnrollInCourse(course_id) => self.enroll_in_course(&course_id),
        }
    }

    fn apply_xp(&mut self, amount: u64) -> Outcome {
        let Some(user) = self.state.user.as_mut() else {
            return Outcome::Skipped(SkipReason::NoUser);
        };
        let prior_level = user.level;
        user.xp = user.xp.saturating_add(amount);
        user.level = level_for_xp(user.xp);
        let level = user.level;

        if level > prior_level {
            info!(level, "level up");
            self.apply_unlock(LEVEL_UP_ACHIEVEMENT_ID);
        }
        Outcome::Applied
    }

    fn apply_unlock(&mut self, id: &str) -> Outcome {
        let now = self.clock.utc();
        let Some(achievement) = self
            .state
            .achievements
            .iter_mut()
            .find(|achievement| achievement.id == id)
        else {
            return Outcome::Skipped(SkipReason::UnknownAchievement);
        };
        if !achievement.unlock(now) {
            return Outcome::Skipped(SkipReason::AlreadyUnlocked);
        }

        let unlocked = achievement.clone();
        info!(achievement = %unlocked.id, "achievement unlocked");
        self.state.new_achievement = Some(unlocked);
        self.state.show_achievement_modal = true;
        Outcome::Applied
    }

    fn commit(&self, outcome: Outcome) -> Outcome {
        if let Outcome::Skipped(reason) = outcome {
            debug!(%reason, "store operation skipped");
        }
        if let Err(err) = self.snapshots.save(&self.state.persisted()) {
            warn!(error = %err, "failed to write snapshot slot");
        }
        outcome
    }
}

#[cfg(test)]
mod tests;
