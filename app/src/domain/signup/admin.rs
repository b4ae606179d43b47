//! Administrator sign-up, a single form gated by an access code.

use super::{
    AccountBasics, RegistrationDetails, RegistrationRequest, SignUpError, StepCounter, Wizard,
    filled,
};
use crate::domain::{Page, Role};

/// The access code accepted by the mock check.
pub const ADMIN_ACCESS_CODE: &str = "ADMIN123";

/// Length at which the access code is checked.
pub const ACCESS_CODE_LEN: usize = 8;

/// Single-step admin form.
///
/// # Examples
///
/// ```
/// use beam::domain::signup::AdminSignUp;
///
/// let mut form = AdminSignUp::default();
/// form.set_access_code("admin12");
/// assert_eq!(form.access_code_valid(), None);
/// form.set_access_code("admin123");
/// assert_eq!(form.access_code(), "ADMIN123");
/// assert_eq!(form.access_code_valid(), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSignUp {
    /// Account fields.
    pub basics: AccountBasics,
    /// Department.
    pub department: String,
    /// Employee identifier.
    pub employee_id: String,
    /// Terms accepted.
    pub agree_to_terms: bool,
    access_code: String,
    access_code_valid: Option<bool>,
    progress: StepCounter,
}

impl Default for AdminSignUp {
    fn default() -> Self {
        Self {
            basics: AccountBasics::default(),
            department: String::new(),
            employee_id: String::new(),
            agree_to_terms: false,
            access_code: String::new(),
            access_code_valid: None,
            progress: StepCounter::new(1),
        }
    }
}

impl AdminSignUp {
    /// An admin form with the account basics filled in.
    #[must_use]
    pub fn new(basics: AccountBasics) -> Self {
        Self {
            basics,
            ..Self::default()
        }
    }

    /// Store the access code upper-cased and re-check it.
    ///
    /// The code is only judged once it has exactly
    /// [`ACCESS_CODE_LEN`] characters; otherwise its validity is unknown.
    pub fn set_access_code(&mut self, input: &str) {
        self.access_code = input.to_uppercase();
        self.access_code_valid = (self.access_code.chars().count() == ACCESS_CODE_LEN)
            .then(|| self.access_code == ADMIN_ACCESS_CODE);
    }

    /// Access code as stored.
    #[must_use]
    pub fn access_code(&self) -> &str {
        &self.access_code
    }

    /// `Some(true)` for the right code, `Some(false)` for a wrong one of
    /// full length, `None` otherwise.
    #[must_use]
    pub const fn access_code_valid(&self) -> Option<bool> {
        self.access_code_valid
    }
}

impl Wizard for AdminSignUp {
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
        if !(self.basics.is_complete()
            && filled(&self.department)
            && filled(&self.employee_id))
        {
            return Err(SignUpError::IncompleteStep { step });
        }
        if self.access_code_valid != Some(true) {
            return Err(SignUpError::InvalidAccessCode);
        }
        if !self.agree_to_terms {
            return Err(SignUpError::TermsNotAccepted);
        }
        Ok(())
    }

    fn build(&self) -> Result<RegistrationRequest, SignUpError> {
        let (email, password) = self.basics.credentials()?;
        Ok(RegistrationRequest {
            role: Role::Admin,
            name: self.basics.full_name(),
            email,
            password,
            details: RegistrationDetails::Admin {
                department: self.department.trim().to_owned(),
                employee_id: self.employee_id.trim().to_owned(),
            },
            next_page: Page::VerifyEmail,
        })
    }
}
