//! Regression coverage for this module.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use mockable::MockClock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{
    FixtureSnapshotRepository, MockStateSnapshotRepository, StateSnapshotRepositoryError,
};
use crate::domain::{Role, Sender};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 4, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

fn clock() -> Arc<dyn Clock> {
    let mut clock = MockClock::new();
    clock.expect_utc().return_const(fixed_now());
    Arc::new(clock)
}

fn learner(xp: u64) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alex Chen".to_owned(),
        email: "alex@example.com".to_owned(),
        role: Role::Learner,
        avatar: None,
        xp,
        level: level_for_xp(xp),
        streak: 0,
        badges: vec![],
        enrolled_courses: vec![],
        created_courses: vec![],
    }
}

#[fixture]
fn seed() -> SeedBundle {
    SeedBundle::builtin().expect("built-in seed bundle")
}

#[fixture]
fn slot() -> FixtureSnapshotRepository {
    FixtureSnapshotRepository::default()
}

fn store_with(
    seed: SeedBundle,
    slot: &FixtureSnapshotRepository,
) -> Store<FixtureSnapshotRepository> {
    Store::new(seed, Arc::new(slot.clone()), clock())
}

fn signed_in(
    seed: SeedBundle,
    slot: &FixtureSnapshotRepository,
    xp: u64,
) -> Store<FixtureSnapshotRepository> {
    let mut store = store_with(seed, slot);
    store.set_user(Some(learner(xp)));
    store
}

#[rstest]
fn fresh_store_uses_defaults(seed: SeedBundle, slot: FixtureSnapshotRepository) {
    let store = store_with(seed.clone(), &slot);
    let state = store.state();

    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.color_scheme, ColorScheme::Blue);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
    assert_eq!(state.current_page, Page::Landing);
    assert_eq!(state.courses, seed.courses);
    assert!(state.chat_messages.is_empty());
    assert!(slot.contents().is_none(), "construction must not write");
}

#[rstest]
fn set_user_recomputes_authentication(seed: SeedBundle, slot: FixtureSnapshotRepository) {
    let mut store = store_with(seed, &slot);

    store.set_user(Some(learner(0)));
    assert!(store.state().is_authenticated);

    store.set_user(None);
    assert!(!store.state().is_authenticated);
    assert!(store.state().user.is_none());
}

#[rstest]
fn award_crossing_a_level_unlocks_level_up(seed: SeedBundle, slot: FixtureSnapshotRepository) {
    let mut store = signed_in(seed, &slot, 950);

    assert_eq!(store.add_xp(100), Outcome::Applied);

    let state = store.state();
    let user = state.user.as_ref().expect("signed in");
    assert_eq!(user.xp, 1_050);
    assert_eq!(user.level, 2);
    let level_up = state.achievement("level-up").expect("seeded");
    assert!(level_up.unlocked);
    assert_eq!(level_up.unlocked_at, Some(fixed_now()));
    assert!(state.show_achievement_modal);
    assert_eq!(
        state.new_achievement.as_ref().map(|a| a.id.as_str()),
        Some("level-up")
    );

    store.close_achievement_modal();
    assert!(!store.state().show_achievement_modal);
    assert!(store.state().new_achievement.is_none());
    assert!(
        store
            .state()
            .achievement("level-up")
            .is_some_and(|a| a.unlocked)
    );
}

#[rstest]
#[case(0, 999, 1, false)]
#[case(999, 1, 2, true)]
#[case(1_000, 0, 2, false)]
#[case(2_450, 5_000, 8, true)]
fn award_recomputes_level(
    seed: SeedBundle,
    slot: FixtureSnapshotRepository,
    #[case] start: u64,
    #[case] amount: u64,
    #[case] expected_level: u64,
    #[case] levelled_up: bool,
) {
    let mut store = signed_in(seed, &slot, start);

    store.add_xp(amount);

    let state = store.state();
    let user = state.user.as_ref().expect("signed in");
    assert_eq!(user.xp, start + amount);
    assert_eq!(user.level, expected_level);
    assert_eq!(state.show_achievement_modal, levelled_up);
}

#[rstest]
fn award_without_user_is_skipped(seed: SeedBundle, slot: FixtureSnapshotRepository) {
    let mut store = store_with(seed, &slot);
    let before = store.state().clone();

    assert_eq!(store.add_xp(500), Outcome::Skipped(SkipReason::NoUser));
    assert_eq!(store.state(), &before);
}

#[rstest]
fn second_unlock_does_not_raise_the_modal_again(
    seed: SeedBundle,
    slot: FixtureSnapshotRepository,
) {
    let mut store = store_with(seed, &slot);

    assert_eq!(store.unlock_achievement("night-owl"), Outcome::Applied);
    store.close_achievement_modal();
    let before = store.state().clone();

    assert_eq!(
        store.unlock_achievement("night-owl"),
        Outcome::Skipped(SkipReason::AlreadyUnlocked)
    );
    assert_eq!(store.state(), &before);
}

#[rstest]
fn unknown_achievement_is_skipped(seed: SeedBundle, slot: FixtureSnapshotRepository) {
    let mut store = store_with(seed, &slot);

    assert_eq!(
        store.unlock_achievement("moon-landing"),
        Outcome::Skipped(SkipReason::UnknownAchievement)
    );
    assert!(!store.state().show_achievement_modal);
}

#[rstest]
fn enrolment_is_idempotent(seed: SeedBundle, slot: FixtureSnapshotRepository) {
    let mut store = signed_in(seed, &slot, 0);

    assert_eq!(store.enroll_in_course("3"), Outcome::Applied);
    assert_eq!(
        store.enroll_in_course("3"),
        Outcome::Skipped(SkipReason::AlreadyEnrolled)
    );

    let enrolled = &store.state().user.as_ref().expect("signed in").enrolled_courses;
    assert_eq!(enrolled, &vec!["3".to_owned()]);
}

#[rstest]
fn enrolment_without_user_is_skipped(seed: SeedBundle, slot: FixtureSnapshotRepository) {
    let mut store = store_with(seed, &slot);
    assert_eq!(
        store.enroll_in_course("1"),
        Outcome::Skipped(SkipReason::NoUser)
    );
}

#[rstest]
fn daily_challenge_awards_once(seed: SeedBundle, slot: FixtureSnapshotRepository) {
    let reward = seed
        .daily_challenge
        .as_ref()
        .map(|challenge| challenge.xp_reward)
        .expect("seeded challenge");
    let mut store = signed_in(seed, &slot, 100);

    assert_eq!(store.complete_daily_challenge(), Outcome::Applied);
    assert_eq!(
        store.complete_daily_challenge(),
        Outcome::Skipped(SkipReason::ChallengeAlreadyCompleted)
    );

    let user = store.state().user.as_ref().expect("signed in");
    assert_eq!(user.xp, 100 + reward);
    assert!(
        store
            .state()
            .daily_challenge
            .as_ref()
            .is_some_and(|c| c.completed)
    );
}

#[rstest]
fn missing_daily_challenge_is_skipped(mut seed: SeedBundle, slot: FixtureSnapshotRepository) {
    seed.daily_challenge = None;
    let mut store = signed_in(seed, &slot, 0);

    assert_eq!(
        store.complete_daily_challenge(),
        Outcome::Skipped(SkipReason::NoDailyChallenge)
    );
}

#[rstest]
fn chat_messages_append_in_order(seed: SeedBundle, slot: FixtureSnapshotRepository) {
    let mut store = store_with(seed, &slot);

    store.add_chat_message(NewChatMessage::new(Sender::User, "What is a closure?"));
    store.add_chat_message(NewChatMessage::new(Sender::Ai, "…").typing());

    let log = &store.state().chat_messages;
    assert_eq!(log.len(), 2);
    assert_eq!(log.first().map(|m| m.sender), Some(Sender::User));
    assert_eq!(log.last().and_then(|m| m.typing), Some(true));
    assert!(log.iter().all(|m| m.timestamp == fixed_now()));
    assert_ne!(
        log.first().map(|m| m.id),
        log.last().map(|m| m.id),
        "ids must be unique"
    );
}

#[rstest]
fn toggle_sidebar_flips(seed: SeedBundle, slot: FixtureSnapshotRepository) {
    let mut store = store_with(seed, &slot);
    store.toggle_sidebar();
    assert!(store.state().sidebar_open);
    store.dispatch(Action::ToggleSidebar);
    assert!(!store.state().sidebar_open);
}

#[rstest]
fn persisted_fields_survive_a_restart(seed: SeedBundle, slot: FixtureSnapshotRepository) {
    let user = learner(2_450);
    {
        let mut store = store_with(seed.clone(), &slot);
        store.set_theme(Theme::Dark);
        store.set_color_scheme(ColorScheme::Purple);
        store.set_user(Some(user.clone()));
        store.set_current_page(Page::Dashboard);
        store.set_selected_course(seed.courses.first().cloned());
        store.add_chat_message(NewChatMessage::new(Sender::User, "hi"));
    }

    let reloaded = store_with(seed, &slot);
    let state = reloaded.state();

    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.color_scheme, ColorScheme::Purple);
    assert_eq!(state.user, Some(user));
    assert!(state.is_authenticated);
    assert_eq!(state.current_page, Page::Landing);
    assert!(state.selected_course.is_none());
    assert!(state.chat_messages.is_empty());
}

#[rstest]
fn corrupt_slot_falls_back_to_defaults(seed: SeedBundle) {
    let slot = FixtureSnapshotRepository::with_contents("{ not json");
    let store = store_with(seed, &slot);
    assert_eq!(store.state().theme, Theme::Light);
    assert!(store.state().user.is_none());
}

#[rstest]
#[case(Action::SetTheme(Theme::Dark))]
#[case(Action::SetCurrentPage(Page::Explorer))]
#[case(Action::SetAiTyping(true))]
#[case(Action::AddXp(10))]
#[case(Action::EnrollInCourse("1".to_owned()))]
#[case(Action::UnlockAchievement("missing".to_owned()))]
#[case(Action::CloseAchievementModal)]
fn every_action_writes_the_slot_once(seed: SeedBundle, #[case] action: Action) {
    let mut repo = MockStateSnapshotRepository::new();
    repo.expect_load().times(1).return_once(|| Ok(None));
    repo.expect_save().times(1).return_once(|_| Ok(()));
    let mut store = Store::new(seed, Arc::new(repo), clock());

    store.dispatch(action);
}

#[rstest]
fn level_up_inside_daily_challenge_writes_once(seed: SeedBundle) {
    let mut repo = MockStateSnapshotRepository::new();
    let persisted = PersistedState {
        user: Some(learner(990)),
        is_authenticated: true,
        ..PersistedState::default()
    };
    repo.expect_load()
        .times(1)
        .return_once(move || Ok(Some(persisted)));
    repo.expect_save().times(1).return_once(|_| Ok(()));
    let mut store = Store::new(seed, Arc::new(repo), clock());

    assert_eq!(store.complete_daily_challenge(), Outcome::Applied);
    assert!(store.state().show_achievement_modal);
}

#[rstest]
fn failed_slot_write_does_not_fail_the_operation(seed: SeedBundle) {
    let mut repo = MockStateSnapshotRepository::new();
    repo.expect_load()
        .times(1)
        .return_once(|| Err(StateSnapshotRepositoryError::io("denied")));
    repo.expect_save()
        .times(1)
        .return_once(|_| Err(StateSnapshotRepositoryError::io("disk full")));
    let mut store = Store::new(seed, Arc::new(repo), clock());

    assert_eq!(store.set_theme(Theme::Dark), Outcome::Applied);
    assert_eq!(store.state().theme, Theme::Dark);
}
