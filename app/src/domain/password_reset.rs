//! Forgot-password flow shared by the reset page and the login modal.

use std::sync::Arc;

use tracing::debug;

use super::auth::LoginValidationError;
use super::ports::PasswordResetService;
use super::{Countdown, EmailAddress, Error};

/// Seconds between reset-link resends.
pub const RESET_RESEND_COOLDOWN_SECS: u64 = 60;

/// Errors returned by the reset flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordResetError {
    /// The email address was rejected.
    #[error(transparent)]
    InvalidEmail(#[from] LoginValidationError),
    /// A resend was requested during the cooldown.
    #[error("resend available in {remaining_secs}s")]
    CoolingDown {
        /// Seconds until another resend is allowed.
        remaining_secs: u64,
    },
    /// A resend was requested before any link was sent.
    #[error("no reset link has been sent yet")]
    NothingToResend,
    /// The reset service failed.
    #[error(transparent)]
    Service(#[from] Error),
}

/// State behind the forgot-password form.
#[derive(Debug)]
pub struct PasswordResetFlow<S: PasswordResetService + ?Sized> {
    service: Arc<S>,
    email: Option<EmailAddress>,
    cooldown: Option<Countdown>,
}

impl<S: PasswordResetService + ?Sized> PasswordResetFlow<S> {
    /// Empty form backed by `service`.
    #[must_use]
    pub const fn new(service: Arc<S>) -> Self {
        Self {
            service,
            email: None,
            cooldown: None,
        }
    }

    /// Address the link was sent to, once sent.
    #[must_use]
    pub const fn sent_to(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Whether a link has been sent.
    #[must_use]
    pub const fn email_sent(&self) -> bool {
        self.email.is_some()
    }

    /// Seconds until another resend is allowed, if a cooldown is running.
    #[must_use]
    pub fn resend_remaining(&self) -> Option<u64> {
        self.cooldown
            .as_ref()
            .map(Countdown::remaining)
            .filter(|left| *left > 0)
    }

    /// Validate `email`, send the first link, and start the cooldown.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordResetError::InvalidEmail`] for a malformed address
    /// and [`PasswordResetError::Service`] if sending fails.
    pub async fn submit(&mut self, email: &str) -> Result<(), PasswordResetError> {
        let address = EmailAddress::parse(email)?;
        self.service.send_reset_link(&address).await?;
        debug!(email = %address, "reset link sent");
        self.email = Some(address);
        self.cooldown = Some(Countdown::start(RESET_RESEND_COOLDOWN_SECS));
        Ok(())
    }

    /// Send another link to the same address and restart the cooldown.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordResetError::CoolingDown`] during the cooldown,
    /// [`PasswordResetError::NothingToResend`] before a first submit, and
    /// [`PasswordResetError::Service`] if sending fails.
    pub async fn resend(&mut self) -> Result<(), PasswordResetError> {
        if let Some(remaining_secs) = self.resend_remaining() {
            return Err(PasswordResetError::CoolingDown { remaining_secs });
        }
        let address = self
            .email
            .as_ref()
            .ok_or(PasswordResetError::NothingToResend)?;
        self.service.resend_reset_link(address).await?;
        debug!(email = %address, "reset link resent");
        self.cooldown = Some(Countdown::start(RESET_RESEND_COOLDOWN_SECS));
        Ok(())
    }
}
