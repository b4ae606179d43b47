//! First-run onboarding: five short steps ending on the dashboard.

use tracing::info;

use super::ports::StateSnapshotRepository;
use super::signup::toggle;
use super::store::Store;
use super::{Difficulty, Page, Role};

/// Interests offered on the interests step.
pub const ONBOARDING_INTERESTS: [&str; 12] = [
    "Web Development",
    "Data Science",
    "Mobile Development",
    "UI/UX Design",
    "Machine Learning",
    "Blockchain",
    "Digital Marketing",
    "Photography",
    "Business",
    "Languages",
    "Music",
    "Art & Design",
];

/// The onboarding steps in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OnboardingStep {
    /// Greeting.
    #[default]
    Welcome,
    /// Learner or instructor.
    Role,
    /// Topics of interest.
    Interests,
    /// Self-assessed level.
    SkillLevel,
    /// Weekly time budget.
    TimeCommitment,
}

impl OnboardingStep {
    /// Every step in order.
    pub const ALL: [Self; 5] = [
        Self::Welcome,
        Self::Role,
        Self::Interests,
        Self::SkillLevel,
        Self::TimeCommitment,
    ];

    /// Short title shown in the progress bar.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Role => "Role",
            Self::Interests => "Interests",
            Self::SkillLevel => "Skill Level",
            Self::TimeCommitment => "Time",
        }
    }

    const fn following(self) -> Option<Self> {
        match self {
            Self::Welcome => Some(Self::Role),
            Self::Role => Some(Self::Interests),
            Self::Interests => Some(Self::SkillLevel),
            Self::SkillLevel => Some(Self::TimeCommitment),
            Self::TimeCommitment => None,
        }
    }

    const fn preceding(self) -> Option<Self> {
        match self {
            Self::Welcome => None,
            Self::Role => Some(Self::Welcome),
            Self::Interests => Some(Self::Role),
            Self::SkillLevel => Some(Self::Interests),
            Self::TimeCommitment => Some(Self::SkillLevel),
        }
    }
}

/// Weekly time budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeCommitment {
    /// One or two hours a week.
    Casual,
    /// Three to five hours a week.
    Regular,
    /// Six or more hours a week.
    Intensive,
}

impl TimeCommitment {
    /// Hours label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Casual => "1-2 hours/week",
            Self::Regular => "3-5 hours/week",
            Self::Intensive => "6+ hours/week",
        }
    }
}

/// What a call to [`Onboarding::next`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingProgress {
    /// Moved to this step.
    Moved(OnboardingStep),
    /// The current step's choice is missing.
    Blocked,
    /// The last step was confirmed; the user is on the dashboard.
    Completed,
}

/// Onboarding answers and position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Onboarding {
    step: OnboardingStep,
    /// Chosen role.
    pub role: Option<Role>,
    /// Chosen interests in selection order.
    pub interests: Vec<String>,
    /// Chosen level.
    pub skill_level: Option<Difficulty>,
    /// Chosen time budget.
    pub time_commitment: Option<TimeCommitment>,
}

impl Onboarding {
    /// Current step.
    #[must_use]
    pub const fn step(&self) -> OnboardingStep {
        self.step
    }

    /// Select or deselect an interest.
    pub fn toggle_interest(&mut self, interest: &str) {
        toggle(&mut self.interests, interest);
    }

    /// Whether the current step has its answer.
    #[must_use]
    pub fn can_proceed(&self) -> bool {
        match self.step {
            OnboardingStep::Welcome => true,
            OnboardingStep::Role => self.role.is_some(),
            OnboardingStep::Interests => !self.interests.is_empty(),
            OnboardingStep::SkillLevel => self.skill_level.is_some(),
            OnboardingStep::TimeCommitment => self.time_commitment.is_some(),
        }
    }

    /// Confirm the current step.
    ///
    /// On the last step this signs in the mock user and shows the
    /// dashboard.
    pub fn next<R>(&mut self, store: &mut Store<R>) -> OnboardingProgress
    where
        R: StateSnapshotRepository + ?Sized,
    {
        if !self.can_proceed() {
            return OnboardingProgress::Blocked;
        }
        if let Some(step) = self.step.following() {
            self.step = step;
            return OnboardingProgress::Moved(step);
        }

        let user = store.state().mock_user.clone();
        info!(user_id = %user.id, "onboarding completed");
        store.set_user(Some(user));
        store.set_current_page(Page::Dashboard);
        OnboardingProgress::Completed
    }

    /// Go back one step. Returns whether it moved.
    pub const fn back(&mut self) -> bool {
        let Some(step) = self.step.preceding() else {
            return false;
        };
        self.step = step;
        true
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Arc;

    use mockable::DefaultClock;

    use super::*;
    use crate::domain::SeedBundle;
    use crate::domain::ports::FixtureSnapshotRepository;

    fn store() -> Store<FixtureSnapshotRepository> {
        Store::new(
            SeedBundle::builtin().expect("seed"),
            Arc::new(FixtureSnapshotRepository::default()),
            Arc::new(DefaultClock),
        )
    }

    #[test]
    fn each_step_waits_for_its_answer() {
        let mut store = store();
        let mut onboarding = Onboarding::default();

        assert_eq!(
            onboarding.next(&mut store),
            OnboardingProgress::Moved(OnboardingStep::Role)
        );
        assert_eq!(onboarding.next(&mut store), OnboardingProgress::Blocked);

        onboarding.role = Some(Role::Learner);
        assert_eq!(
            onboarding.next(&mut store),
            OnboardingProgress::Moved(OnboardingStep::Interests)
        );

        onboarding.toggle_interest("Photography");
        onboarding.next(&mut store);
        onboarding.skill_level = Some(Difficulty::Beginner);
        onboarding.next(&mut store);
        assert_eq!(onboarding.step(), OnboardingStep::TimeCommitment);
        assert_eq!(onboarding.next(&mut store), OnboardingProgress::Blocked);
        assert!(store.state().user.is_none());

        onboarding.time_commitment = Some(TimeCommitment::Regular);
        assert_eq!(onboarding.next(&mut store), OnboardingProgress::Completed);

        let state = store.state();
        assert_eq!(state.current_page, Page::Dashboard);
        assert_eq!(state.user.as_ref(), Some(&state.mock_user));
        assert!(state.is_authenticated);
    }

    #[test]
    fn back_stops_at_welcome() {
        let mut store = store();
        let mut onboarding = Onboarding::default();
        onboarding.next(&mut store);

        assert!(onboarding.back());
        assert!(!onboarding.back());
        assert_eq!(onboarding.step(), OnboardingStep::Welcome);
    }
}
