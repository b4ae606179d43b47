//! Email verification screen.
//!
//! A freshly registered user lands here. The address verifies itself after a
//! short countdown, or immediately when the user asks. Resending the email
//! starts a cooldown during which further resends are refused.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::ports::StateSnapshotRepository;
use super::store::Store;
use super::{Countdown, Page};

/// Seconds before the address verifies itself.
pub const AUTO_VERIFY_SECS: u64 = 10;

/// Time spent in [`VerificationStatus::Verifying`].
pub const VERIFY_DELAY: Duration = Duration::from_secs(2);

/// Seconds between resends.
pub const RESEND_COOLDOWN_SECS: u64 = 60;

/// Progress of the verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerificationStatus {
    /// Waiting for the link to be followed.
    #[default]
    Pending,
    /// Checking the link.
    Verifying,
    /// Address confirmed.
    Verified,
}

/// Errors returned by verification actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    /// A resend was requested during the cooldown.
    #[error("resend available in {remaining_secs}s")]
    CoolingDown {
        /// Seconds until another resend is allowed.
        remaining_secs: u64,
    },
    /// The user tried to continue before the address was verified.
    #[error("email address is not verified yet")]
    NotVerified,
}

/// State behind the verify-email page.
///
/// Background work stops when the value is dropped.
#[derive(Debug)]
pub struct EmailVerification {
    status: Arc<watch::Sender<VerificationStatus>>,
    auto_verify: Countdown,
    auto_task: JoinHandle<()>,
    manual_task: Option<JoinHandle<()>>,
    resend_cooldown: Option<Countdown>,
}

impl EmailVerification {
    /// Open the page and start the auto-verify countdown.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn start() -> Self {
        let status = Arc::new(watch::Sender::new(VerificationStatus::Pending));
        let auto_verify = Countdown::start(AUTO_VERIFY_SECS);

        let mut ticks = auto_verify.subscribe();
        let auto_status = Arc::clone(&status);
        let auto_task = tokio::spawn(async move {
            if ticks.wait_for(|left| *left == 0).await.is_ok() {
                begin_verifying(&auto_status).await;
            }
        });

        Self {
            status,
            auto_verify,
            auto_task,
            manual_task: None,
            resend_cooldown: None,
        }
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> VerificationStatus {
        *self.status.borrow()
    }

    /// Receiver observing status changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<VerificationStatus> {
        self.status.subscribe()
    }

    /// Seconds until the address verifies itself.
    #[must_use]
    pub fn auto_verify_remaining(&self) -> u64 {
        self.auto_verify.remaining()
    }

    /// Seconds until another resend is allowed, if a cooldown is running.
    #[must_use]
    pub fn resend_remaining(&self) -> Option<u64> {
        self.resend_cooldown
            .as_ref()
            .map(Countdown::remaining)
            .filter(|left| *left > 0)
    }

    /// Verify without waiting for the countdown.
    ///
    /// Only a pending verification moves; later calls have no effect.
    pub fn verify_now(&mut self) {
        if self.status() != VerificationStatus::Pending {
            return;
        }
        let status = Arc::clone(&self.status);
        if let Some(previous) = self.manual_task.replace(tokio::spawn(async move {
            begin_verifying(&status).await;
        })) {
            previous.abort();
        }
    }

    /// Send the email again and start the cooldown.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError::CoolingDown`] while a cooldown runs.
    pub fn resend(&mut self) -> Result<(), VerificationError> {
        if let Some(remaining_secs) = self.resend_remaining() {
            return Err(VerificationError::CoolingDown { remaining_secs });
        }
        self.resend_cooldown = Some(Countdown::start(RESEND_COOLDOWN_SECS));
        Ok(())
    }

    /// Move on to onboarding once the address is verified.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError::NotVerified`] before verification
    /// completes; the store is left untouched.
    pub fn continue_to<R: StateSnapshotRepository + ?Sized>(
        &self,
        store: &mut Store<R>,
    ) -> Result<(), VerificationError> {
        if self.status() != VerificationStatus::Verified {
            return Err(VerificationError::NotVerified);
        }
        store.set_current_page(Page::Onboarding);
        Ok(())
    }
}

async fn begin_verifying(status: &watch::Sender<VerificationStatus>) {
    let started = status.send_if_modified(|current| {
        if *current == VerificationStatus::Pending {
            *current = VerificationStatus::Verifying;
            true
        } else {
            false
        }
    });
    if started {
        tokio::time::sleep(VERIFY_DELAY).await;
        status.send_replace(VerificationStatus::Verified);
    }
}

impl Drop for EmailVerification {
    fn drop(&mut self) {
        self.auto_task.abort();
        if let Some(task) = self.manual_task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use tokio::time::{Instant, sleep};

    async fn wait_for_status(
        verification: &EmailVerification,
        expected: VerificationStatus,
    ) -> Duration {
        let started = Instant::now();
        let mut status = verification.subscribe();
        status
            .wait_for(|current| *current == expected)
            .await
            .expect("status sender alive");
        started.elapsed()
    }

    #[tokio::test(start_paused = true)]
    async fn verifies_itself_after_the_countdown() {
        let verification = EmailVerification::start();
        assert_eq!(verification.status(), VerificationStatus::Pending);
        assert_eq!(verification.auto_verify_remaining(), AUTO_VERIFY_SECS);

        let to_verifying = wait_for_status(&verification, VerificationStatus::Verifying).await;
        assert_eq!(to_verifying, Duration::from_secs(AUTO_VERIFY_SECS));

        let to_verified = wait_for_status(&verification, VerificationStatus::Verified).await;
        assert_eq!(to_verified, VERIFY_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_verify_skips_the_countdown() {
        let mut verification = EmailVerification::start();

        verification.verify_now();
        let elapsed = wait_for_status(&verification, VerificationStatus::Verified).await;

        assert_eq!(elapsed, VERIFY_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn auto_verify_does_not_regress_a_verified_address() {
        let mut verification = EmailVerification::start();
        verification.verify_now();
        wait_for_status(&verification, VerificationStatus::Verified).await;

        sleep(Duration::from_secs(AUTO_VERIFY_SECS)).await;

        assert_eq!(verification.status(), VerificationStatus::Verified);
    }

    #[tokio::test(start_paused = true)]
    async fn resend_is_refused_during_cooldown() {
        let mut verification = EmailVerification::start();

        assert_eq!(verification.resend(), Ok(()));
        sleep(Duration::from_millis(15_500)).await;
        assert_eq!(
            verification.resend(),
            Err(VerificationError::CoolingDown { remaining_secs: 45 })
        );

        sleep(Duration::from_secs(45)).await;
        assert_eq!(verification.resend_remaining(), None);
        assert_eq!(verification.resend(), Ok(()));
    }
}
