//! Driving port for sign-in use-cases.
//!
//! Screens call this port to authenticate without knowing what backs it.
//! The only adapter today is a fixture that resolves every well-formed
//! credential pair to the mock user after a simulated delay.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, SocialProvider, User};

/// Simulated round trip of the login form.
pub const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_millis(1_500);

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user.
    async fn sign_in(&self, credentials: &LoginCredentials) -> Result<User, Error>;

    /// Authenticate through a third-party identity provider.
    async fn sign_in_with_provider(&self, provider: SocialProvider) -> Result<User, Error>;
}

/// In-memory authenticator standing in for a real identity service.
///
/// Any credentials that passed validation sign in as `user`. Social sign-in
/// skips the delay.
#[derive(Debug, Clone)]
pub struct FixtureLoginService {
    user: User,
    latency: Duration,
}

impl FixtureLoginService {
    /// Authenticator resolving to `user` after [`DEFAULT_LOGIN_LATENCY`].
    #[must_use]
    pub const fn new(user: User) -> Self {
        Self {
            user,
            latency: DEFAULT_LOGIN_LATENCY,
        }
    }

    /// Override the simulated delay; zero disables it.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn sign_in(&self, _credentials: &LoginCredentials) -> Result<User, Error> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.user.clone())
    }

    async fn sign_in_with_provider(&self, _provider: SocialProvider) -> Result<User, Error> {
        Ok(self.user.clone())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::Role;
    use rstest::{fixture, rstest};
    use tokio::time::Instant;

    #[fixture]
    fn mock_user() -> User {
        User {
            id: "1".to_owned(),
            name: "Alex Chen".to_owned(),
            email: "alex@example.com".to_owned(),
            role: Role::Learner,
            avatar: None,
            xp: 2_450,
            level: 3,
            streak: 7,
            badges: vec![],
            enrolled_courses: vec![],
            created_courses: vec![],
        }
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn sign_in_waits_for_the_simulated_delay(mock_user: User) {
        let service = FixtureLoginService::new(mock_user.clone());
        let creds =
            LoginCredentials::try_from_parts("someone@example.com", "pw").expect("credentials");
        let started = Instant::now();

        let user = service.sign_in(&creds).await.expect("fixture always succeeds");

        assert_eq!(user, mock_user);
        assert!(started.elapsed() >= DEFAULT_LOGIN_LATENCY);
    }

    #[rstest]
    #[case(SocialProvider::Google)]
    #[case(SocialProvider::GitHub)]
    #[tokio::test(start_paused = true)]
    async fn social_sign_in_is_immediate(mock_user: User, #[case] provider: SocialProvider) {
        let service = FixtureLoginService::new(mock_user.clone());
        let started = Instant::now();

        let user = service
            .sign_in_with_provider(provider)
            .await
            .expect("fixture always succeeds");

        assert_eq!(user, mock_user);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
