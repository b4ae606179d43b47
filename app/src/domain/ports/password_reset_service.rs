//! Driving port for password reset emails.
//!
//! The forgot-password page and the login modal use different simulated
//! delays, so the fixture offers one constructor per surface.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{EmailAddress, Error};

/// Domain use-case port for sending reset links.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordResetService: Send + Sync {
    /// Send the first reset link to `email`.
    async fn send_reset_link(&self, email: &EmailAddress) -> Result<(), Error>;

    /// Send another reset link to `email`.
    async fn resend_reset_link(&self, email: &EmailAddress) -> Result<(), Error>;
}

/// Reset-link stand-in that always succeeds after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixturePasswordResetService {
    send_latency: Duration,
    resend_latency: Duration,
}

impl FixturePasswordResetService {
    /// Delays used by the forgot-password page.
    #[must_use]
    pub const fn page() -> Self {
        Self {
            send_latency: Duration::from_millis(2_000),
            resend_latency: Duration::from_millis(1_000),
        }
    }

    /// Delays used by the login page's reset modal.
    #[must_use]
    pub const fn modal() -> Self {
        Self {
            send_latency: Duration::from_millis(1_000),
            resend_latency: Duration::from_millis(1_000),
        }
    }

    /// Replace both delays with `latency`; zero disables them.
    #[must_use]
    pub const fn with_latency(latency: Duration) -> Self {
        Self {
            send_latency: latency,
            resend_latency: latency,
        }
    }

    /// Delay before the first link is reported sent.
    #[must_use]
    pub const fn send_latency(&self) -> Duration {
        self.send_latency
    }

    /// Delay before a resent link is reported sent.
    #[must_use]
    pub const fn resend_latency(&self) -> Duration {
        self.resend_latency
    }
}

async fn simulate(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

#[async_trait]
impl PasswordResetService for FixturePasswordResetService {
    async fn send_reset_link(&self, _email: &EmailAddress) -> Result<(), Error> {
        simulate(self.send_latency).await;
        Ok(())
    }

    async fn resend_reset_link(&self, _email: &EmailAddress) -> Result<(), Error> {
        simulate(self.resend_latency).await;
        Ok(())
    }
}
