//! End-to-end walks through the sign-up, sign-in, and reset screens.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;
use std::time::Duration;

use beam::domain::onboarding::{Onboarding, OnboardingProgress, TimeCommitment};
use beam::domain::ports::{
    FixtureLoginService, FixturePasswordResetService, FixtureRegistrationService,
    FixtureSnapshotRepository,
};
use beam::domain::signup::{AccountBasics, StudentSignUp, Wizard, register};
use beam::domain::{
    Dashboard, Difficulty, EmailVerification, LoginCredentials, Page, PasswordResetError,
    PasswordResetFlow, Role, SeedBundle, Store, VerificationStatus, sign_in, sign_out,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestStore = Store<FixtureSnapshotRepository>;

#[fixture]
fn store() -> TestStore {
    Store::new(
        SeedBundle::builtin().expect("built-in seed bundle"),
        Arc::new(FixtureSnapshotRepository::default()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn student_sign_up_reaches_the_dashboard(mut store: TestStore) {
    let mut wizard = StudentSignUp::new(AccountBasics::new(
        "Maya",
        "Patel",
        "maya@example.com",
        "correct horse",
    ));
    assert!(wizard.next());
    wizard.date_of_birth = "2010-09-01".to_owned();
    wizard.grade = "Middle School (6-8)".to_owned();
    assert!(wizard.next());
    wizard.toggle_interest("Science");
    wizard.agree_to_terms = true;
    let request = wizard.submit().expect("complete form");

    register(&mut store, &FixtureRegistrationService::default(), &request)
        .await
        .expect("registered");
    assert_eq!(store.state().current_page, Page::VerifyEmail);

    let verification = EmailVerification::start();
    let mut status = verification.subscribe();
    status
        .wait_for(|current| *current == VerificationStatus::Verified)
        .await
        .expect("verification task alive");
    verification.continue_to(&mut store).expect("verified");
    assert_eq!(store.state().current_page, Page::Onboarding);

    let mut onboarding = Onboarding::default();
    onboarding.next(&mut store);
    onboarding.role = Some(Role::Learner);
    onboarding.next(&mut store);
    onboarding.toggle_interest("Data Science");
    onboarding.next(&mut store);
    onboarding.skill_level = Some(Difficulty::Beginner);
    onboarding.next(&mut store);
    onboarding.time_commitment = Some(TimeCommitment::Casual);
    assert_eq!(onboarding.next(&mut store), OnboardingProgress::Completed);

    let state = store.state();
    assert_eq!(state.current_page, Page::Dashboard);
    assert_eq!(Dashboard::from_state(state).summary.first_name, "Alex");
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn login_waits_for_the_service_then_signs_out(mut store: TestStore) {
    let service = FixtureLoginService::new(store.state().mock_user.clone());
    let credentials =
        LoginCredentials::try_from_parts("alex@example.com", "hunter2").expect("valid input");
    let started = tokio::time::Instant::now();

    let user = sign_in(&mut store, &service, &credentials)
        .await
        .expect("signed in");

    assert!(started.elapsed() >= Duration::from_millis(1_500));
    assert_eq!(user.name, "Alex Chen");
    assert!(store.state().is_authenticated);
    assert_eq!(store.state().current_page, Page::Dashboard);

    sign_out(&mut store);
    assert!(!store.state().is_authenticated);
    assert_eq!(store.state().current_page, Page::Landing);
}

#[tokio::test(start_paused = true)]
async fn password_reset_enforces_the_cooldown() {
    let mut flow = PasswordResetFlow::new(Arc::new(FixturePasswordResetService::page()));

    flow.submit("alex@example.com").await.expect("sent");
    assert!(flow.email_sent());
    assert!(matches!(
        flow.resend().await,
        Err(PasswordResetError::CoolingDown { .. })
    ));

    tokio::time::sleep(Duration::from_secs(61)).await;
    flow.resend().await.expect("cooldown over");
    assert_eq!(
        flow.sent_to().map(ToString::to_string),
        Some("alex@example.com".to_owned())
    );
}
