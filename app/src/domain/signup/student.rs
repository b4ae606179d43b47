//! Student sign-up: account, schooling, interests.

use chrono::NaiveDate;

use super::{
    AccountBasics, RegistrationDetails, RegistrationRequest, SignUpError, StepCounter, Wizard,
    filled, optional, step_gate, terms_gate, toggle,
};
use crate::domain::{Page, Role};

/// Grades offered on the schooling step.
pub const STUDENT_GRADES: [&str; 6] = [
    "Elementary (K-5)",
    "Middle School (6-8)",
    "High School (9-12)",
    "College/University",
    "Graduate School",
    "Professional Development",
];

/// Interests offered on the last step.
pub const STUDENT_INTERESTS: [&str; 12] = [
    "Mathematics",
    "Science",
    "English/Literature",
    "History",
    "Art & Design",
    "Music",
    "Technology",
    "Languages",
    "Sports",
    "Business",
    "Health",
    "Psychology",
];

/// Three-step student wizard.
///
/// # Examples
///
/// ```
/// use beam::domain::signup::{AccountBasics, StudentSignUp, Wizard};
///
/// let mut wizard = StudentSignUp::default();
/// assert!(!wizard.next(), "step one needs the account basics");
///
/// wizard.basics = AccountBasics::new("Maya", "Patel", "maya@example.com", "s3cret!");
/// assert!(wizard.next());
/// assert_eq!(wizard.step(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSignUp {
    /// Step one.
    pub basics: AccountBasics,
    /// Date of birth as `YYYY-MM-DD`.
    pub date_of_birth: String,
    /// Chosen grade.
    pub grade: String,
    /// Selected interests in selection order.
    pub interests: Vec<String>,
    /// Optional parent email.
    pub parent_email: String,
    /// Terms accepted.
    pub agree_to_terms: bool,
    progress: StepCounter,
}

impl Default for StudentSignUp {
    fn default() -> Self {
        Self {
            basics: AccountBasics::default(),
            date_of_birth: String::new(),
            grade: String::new(),
            interests: Vec::new(),
            parent_email: String::new(),
            agree_to_terms: false,
            progress: StepCounter::new(3),
        }
    }
}

impl StudentSignUp {
    /// A student wizard at step one with the account basics filled in.
    #[must_use]
    pub fn new(basics: AccountBasics) -> Self {
        Self {
            basics,
            ..Self::default()
        }
    }

    /// Select or deselect an interest.
    pub fn toggle_interest(&mut self, interest: &str) {
        toggle(&mut self.interests, interest);
    }
}

impl Wizard for StudentSignUp {
    fn progress(&self) -> StepCounter {
        self.progress
    }

    fn progress_mut(&mut self) -> &mut StepCounter {
        &mut self.progress
    }

    fn check_step(&self, step: u8) -> Result<(), SignUpError> {
        match step {
            1 => step_gate(step, self.basics.is_complete()),
            2 => step_gate(step, filled(&self.date_of_birth) && filled(&self.grade)),
            3 => terms_gate(step, !self.interests.is_empty(), self.agree_to_terms),
            _ => Ok(()),
        }
    }

    fn build(&self) -> Result<RegistrationRequest, SignUpError> {
        let (email, password) = self.basics.credentials()?;
        let raw_date = self.date_of_birth.trim();
        let date_of_birth = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| {
            SignUpError::InvalidField {
                field: "date of birth",
                input: raw_date.to_owned(),
            }
        })?;

        Ok(RegistrationRequest {
            role: Role::Learner,
            name: self.basics.full_name(),
            email,
            password,
            details: RegistrationDetails::Student {
                date_of_birth,
                grade: self.grade.trim().to_owned(),
                interests: self.interests.clone(),
                parent_email: optional(&self.parent_email),
            },
            next_page: Page::VerifyEmail,
        })
    }
}
