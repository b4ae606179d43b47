//! The simple register form reached from the login page.

use zeroize::Zeroizing;

use super::{
    RegistrationDetails, RegistrationRequest, SignUpError, StepCounter, Wizard,
    checked_credentials, filled,
};
use crate::domain::{Page, Role};

/// Single-step form: name, email, password, terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterForm {
    /// Full name.
    pub name: String,
    /// Email address as typed.
    pub email: String,
    /// Password.
    pub password: Zeroizing<String>,
    /// Password confirmation.
    pub confirm_password: Zeroizing<String>,
    /// Terms accepted.
    pub agree_to_terms: bool,
    progress: StepCounter,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: Zeroizing::default(),
            confirm_password: Zeroizing::default(),
            agree_to_terms: false,
            progress: StepCounter::new(1),
        }
    }
}

impl Wizard for RegisterForm {
    fn progress(&self) -> StepCounter {
        self.progress
    }

    fn progress_mut(&mut self) -> &mut StepCounter {
        &mut self.progress
    }

    fn check_step(&self, step: u8) -> Result<(), SignUpError> {
        if step != 1 {
            return Ok(());
        }
        if !(filled(&self.name)
            && filled(&self.email)
            && !self.password.is_empty()
            && !self.confirm_password.is_empty())
        {
            return Err(SignUpError::IncompleteStep { step });
        }
        if !self.agree_to_terms {
            return Err(SignUpError::TermsNotAccepted);
        }
        Ok(())
    }

    fn build(&self) -> Result<RegistrationRequest, SignUpError> {
        let (email, password) =
            checked_credentials(&self.email, &self.password, &self.confirm_password)?;
        Ok(RegistrationRequest {
            role: Role::Learner,
            name: self.name.trim().to_owned(),
            email,
            password,
            details: RegistrationDetails::Basic,
            next_page: Page::Onboarding,
        })
    }
}
