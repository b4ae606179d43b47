//! Sign-up forms for every role, plus the simple register form.
//!
//! Each form is a [`Wizard`]: a fixed number of steps, a gate per step, and
//! a `submit` that re-checks every gate before producing a
//! [`RegistrationRequest`]. Forms never talk to a service themselves;
//! [`register`] hands the request to a [`RegistrationService`] and moves
//! the store to the next page.

mod admin;
mod parent;
mod register_form;
mod student;
mod teacher;

use tracing::info;
use zeroize::Zeroizing;

use super::auth::LoginValidationError;
use super::ports::{RegistrationService, StateSnapshotRepository};
use super::store::Store;
use super::{EmailAddress, Error, Page, Role, SocialProvider};

pub use admin::{ACCESS_CODE_LEN, ADMIN_ACCESS_CODE, AdminSignUp};
pub use parent::{ConnectionMethod, PARENT_GRADES, ParentSignUp, RELATIONSHIPS};
pub use register_form::RegisterForm;
pub use student::{STUDENT_GRADES, STUDENT_INTERESTS, StudentSignUp};
pub use teacher::{QUALIFICATIONS, SUBJECTS, TeacherSignUp};

/// Reasons a sign-up form cannot move on or be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignUpError {
    /// A required field on `step` is empty.
    #[error("step {step} is incomplete")]
    IncompleteStep {
        /// One-based step number.
        step: u8,
    },
    /// The terms were not accepted.
    #[error("the terms of service must be accepted")]
    TermsNotAccepted,
    /// The email address was rejected.
    #[error(transparent)]
    InvalidEmail(#[from] LoginValidationError),
    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,
    /// The admin access code is wrong or incomplete.
    #[error("invalid admin access code")]
    InvalidAccessCode,
    /// A field holds a value of the wrong shape.
    #[error("invalid {field}: {input}")]
    InvalidField {
        /// Field name.
        field: &'static str,
        /// The rejected input.
        input: String,
    },
}

/// Name, email, and password fields shared by the role wizards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountBasics {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address as typed.
    pub email: String,
    /// Password.
    pub password: Zeroizing<String>,
    /// Password confirmation.
    pub confirm_password: Zeroizing<String>,
}

impl AccountBasics {
    /// Basics with every field filled in.
    #[must_use]
    pub fn new(first_name: &str, last_name: &str, email: &str, password: &str) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
            confirm_password: Zeroizing::new(password.to_owned()),
        }
    }

    /// Whether every field has content.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        filled(&self.first_name)
            && filled(&self.last_name)
            && filled(&self.email)
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
    }

    /// `"First Last"` with surrounding whitespace removed.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    fn credentials(&self) -> Result<(EmailAddress, Zeroizing<String>), SignUpError> {
        checked_credentials(&self.email, &self.password, &self.confirm_password)
    }
}

fn checked_credentials(
    email: &str,
    password: &Zeroizing<String>,
    confirm: &Zeroizing<String>,
) -> Result<(EmailAddress, Zeroizing<String>), SignUpError> {
    let address = EmailAddress::parse(email)?;
    if password.as_str() != confirm.as_str() {
        return Err(SignUpError::PasswordMismatch);
    }
    Ok((address, password.clone()))
}

/// Gate for a step whose fields are either all there or not.
pub(crate) const fn step_gate(step: u8, complete: bool) -> Result<(), SignUpError> {
    if complete {
        Ok(())
    } else {
        Err(SignUpError::IncompleteStep { step })
    }
}

/// Gate for a final step that also needs the terms accepted.
pub(crate) const fn terms_gate(step: u8, complete: bool, agreed: bool) -> Result<(), SignUpError> {
    match (complete, agreed) {
        (false, _) => Err(SignUpError::IncompleteStep { step }),
        (true, false) => Err(SignUpError::TermsNotAccepted),
        (true, true) => Ok(()),
    }
}

pub(crate) fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Add `item` if absent, remove it if present.
pub(crate) fn toggle(list: &mut Vec<String>, item: &str) {
    if let Some(index) = list.iter().position(|existing| existing == item) {
        list.remove(index);
    } else {
        list.push(item.to_owned());
    }
}

pub(crate) fn optional(value: &str) -> Option<String> {
    filled(value).then(|| value.trim().to_owned())
}

/// A child account created or linked by a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildLink {
    /// Create a new student account.
    Create {
        /// Child's given name.
        first_name: String,
        /// Child's family name.
        last_name: String,
        /// Child's email, if they have one.
        email: Option<String>,
        /// Child's grade.
        grade: String,
    },
    /// Link an existing student by code.
    Connect {
        /// Code shown on the student's profile.
        student_code: String,
    },
}

/// Role-specific fields of a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationDetails {
    /// Student wizard.
    Student {
        /// Date of birth.
        date_of_birth: chrono::NaiveDate,
        /// School grade.
        grade: String,
        /// Selected interests in selection order.
        interests: Vec<String>,
        /// Parent's email for progress reports.
        parent_email: Option<String>,
    },
    /// Teacher wizard.
    Teacher {
        /// School or organisation.
        institution: String,
        /// Years spent teaching.
        years_experience: u32,
        /// Subjects taught.
        subjects: Vec<String>,
        /// Qualifications held.
        qualifications: Vec<String>,
        /// Short biography.
        bio: Option<String>,
        /// `LinkedIn` profile URL.
        linkedin: Option<String>,
        /// Personal website.
        website: Option<String>,
        /// Names of uploaded credential files.
        credential_files: Vec<String>,
    },
    /// Parent wizard.
    Parent {
        /// Contact phone.
        phone: Option<String>,
        /// Relationship to the child.
        relationship: String,
        /// How the child is linked.
        child: ChildLink,
    },
    /// Admin form.
    Admin {
        /// Department.
        department: String,
        /// Employee identifier.
        employee_id: String,
    },
    /// Simple register form.
    Basic,
}

/// A validated registration ready for a [`RegistrationService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    /// Account role.
    pub role: Role,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: EmailAddress,
    /// Chosen password.
    pub password: Zeroizing<String>,
    /// Role-specific fields.
    pub details: RegistrationDetails,
    /// Page shown once the account exists.
    pub next_page: Page,
}

/// One-based step position clamped to `1..=total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCounter {
    current: u8,
    total: u8,
}

impl StepCounter {
    /// Counter at step one of `total` (at least one).
    #[must_use]
    pub const fn new(total: u8) -> Self {
        Self {
            current: 1,
            total: if total == 0 { 1 } else { total },
        }
    }

    /// Current step.
    #[must_use]
    pub const fn current(self) -> u8 {
        self.current
    }

    /// Number of steps.
    #[must_use]
    pub const fn total(self) -> u8 {
        self.total
    }

    /// Whether the current step is the last.
    #[must_use]
    pub const fn is_last(self) -> bool {
        self.current == self.total
    }

    const fn advance(&mut self) -> bool {
        if self.current < self.total {
            self.current += 1;
            true
        } else {
            false
        }
    }

    const fn retreat(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }
}

/// A multi-step form with a gate per step.
pub trait Wizard {
    /// Step position.
    fn progress(&self) -> StepCounter;

    /// Mutable step position.
    fn progress_mut(&mut self) -> &mut StepCounter;

    /// Check the gate of `step`.
    ///
    /// # Errors
    ///
    /// Returns the first [`SignUpError`] that blocks `step`.
    fn check_step(&self, step: u8) -> Result<(), SignUpError>;

    /// Build the request once every gate passes.
    ///
    /// # Errors
    ///
    /// Returns a [`SignUpError`] for fields that are present but malformed.
    fn build(&self) -> Result<RegistrationRequest, SignUpError>;

    /// Current one-based step.
    fn step(&self) -> u8 {
        self.progress().current()
    }

    /// Number of steps.
    fn total_steps(&self) -> u8 {
        self.progress().total()
    }

    /// Whether the current step's gate passes.
    fn can_proceed(&self) -> bool {
        self.check_step(self.step()).is_ok()
    }

    /// Advance one step if the gate passes. Returns whether it moved.
    fn next(&mut self) -> bool {
        self.can_proceed() && self.progress_mut().advance()
    }

    /// Go back one step. Returns whether it moved.
    fn back(&mut self) -> bool {
        self.progress_mut().retreat()
    }

    /// Check every gate and produce the registration.
    ///
    /// # Errors
    ///
    /// Returns the first failing gate, a malformed email, or a password
    /// mismatch.
    fn submit(&self) -> Result<RegistrationRequest, SignUpError> {
        for step in 1..=self.total_steps() {
            self.check_step(step)?;
        }
        self.build()
    }
}

/// Create the account and move the store to the request's next page.
///
/// # Errors
///
/// Propagates any error from `service`; the store is left untouched.
pub async fn register<R, S>(
    store: &mut Store<R>,
    service: &S,
    request: &RegistrationRequest,
) -> Result<(), Error>
where
    R: StateSnapshotRepository + ?Sized,
    S: RegistrationService + ?Sized,
{
    service.register(request).await?;
    info!(role = %request.role, next = %request.next_page, "account registered");
    store.set_current_page(request.next_page);
    Ok(())
}

/// Register through a social provider; goes straight to onboarding.
pub fn register_with_provider<R>(store: &mut Store<R>, provider: SocialProvider)
where
    R: StateSnapshotRepository + ?Sized,
{
    info!(%provider, "registered with provider");
    store.set_current_page(Page::Onboarding);
}
