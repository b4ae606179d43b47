//! Driving port for account registration.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Error, RegistrationRequest};

/// Simulated round trip of a registration submit.
pub const DEFAULT_REGISTRATION_LATENCY: Duration = Duration::from_millis(2_000);

/// Domain use-case port for creating accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Create the account described by `request`.
    async fn register(&self, request: &RegistrationRequest) -> Result<(), Error>;
}

/// Registration stand-in that accepts every validated request.
#[derive(Debug, Clone, Copy)]
pub struct FixtureRegistrationService {
    latency: Duration,
}

impl FixtureRegistrationService {
    /// Override the simulated delay; zero disables it.
    #[must_use]
    pub const fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for FixtureRegistrationService {
    fn default() -> Self {
        Self::with_latency(DEFAULT_REGISTRATION_LATENCY)
    }
}

#[async_trait]
impl RegistrationService for FixtureRegistrationService {
    async fn register(&self, _request: &RegistrationRequest) -> Result<(), Error> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(())
    }
}
