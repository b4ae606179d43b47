//! Teacher sign-up: account, professional background, credentials.

use super::{
    AccountBasics, RegistrationDetails, RegistrationRequest, SignUpError, StepCounter, Wizard,
    filled, optional, step_gate, terms_gate, toggle,
};
use crate::domain::{Page, Role};

/// Subjects offered on the background step.
pub const SUBJECTS: [&str; 12] = [
    "Mathematics",
    "Science",
    "English/Literature",
    "History",
    "Art & Design",
    "Music",
    "Technology",
    "Languages",
    "Business",
    "Health",
    "Psychology",
    "Engineering",
];

/// Qualifications offered on the credentials step.
pub const QUALIFICATIONS: [&str; 7] = [
    "High School Diploma",
    "Bachelor's Degree",
    "Master's Degree",
    "PhD/Doctorate",
    "Teaching Certificate",
    "Professional Certification",
    "Industry Experience",
];

/// Three-step teacher wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherSignUp {
    /// Step one.
    pub basics: AccountBasics,
    /// School or organisation.
    pub institution: String,
    /// Years teaching, as typed.
    pub years_experience: String,
    /// Selected subjects.
    pub subjects: Vec<String>,
    /// Selected qualifications.
    pub qualifications: Vec<String>,
    /// Optional biography.
    pub bio: String,
    /// Optional `LinkedIn` URL.
    pub linkedin: String,
    /// Optional website.
    pub website: String,
    /// Terms accepted.
    pub agree_to_terms: bool,
    uploaded_files: Vec<String>,
    progress: StepCounter,
}

impl Default for TeacherSignUp {
    fn default() -> Self {
        Self {
            basics: AccountBasics::default(),
            institution: String::new(),
            years_experience: String::new(),
            subjects: Vec::new(),
            qualifications: Vec::new(),
            bio: String::new(),
            linkedin: String::new(),
            website: String::new(),
            agree_to_terms: false,
            uploaded_files: Vec::new(),
            progress: StepCounter::new(3),
        }
    }
}

impl TeacherSignUp {
    /// A teacher wizard at step one with the account basics filled in.
    #[must_use]
    pub fn new(basics: AccountBasics) -> Self {
        Self {
            basics,
            ..Self::default()
        }
    }

    /// Select or deselect a subject.
    pub fn toggle_subject(&mut self, subject: &str) {
        toggle(&mut self.subjects, subject);
    }

    /// Select or deselect a qualification.
    pub fn toggle_qualification(&mut self, qualification: &str) {
        toggle(&mut self.qualifications, qualification);
    }

    /// Record credential uploads. Only the file names are kept.
    pub fn upload_files<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.uploaded_files.extend(names.into_iter().map(Into::into));
    }

    /// Names of the recorded uploads.
    #[must_use]
    pub fn uploaded_files(&self) -> &[String] {
        &self.uploaded_files
    }
}

impl Wizard for TeacherSignUp {
    fn progress(&self) -> StepCounter {
        self.progress
    }

    fn progress_mut(&mut self) -> &mut StepCounter {
        &mut self.progress
    }

    fn check_step(&self, step: u8) -> Result<(), SignUpError> {
        match step {
            1 => step_gate(step, self.basics.is_complete()),
            2 => step_gate(
                step,
                filled(&self.institution)
                    && filled(&self.years_experience)
                    && !self.subjects.is_empty(),
            ),
            3 => terms_gate(step, !self.qualifications.is_empty(), self.agree_to_terms),
            _ => Ok(()),
        }
    }

    fn build(&self) -> Result<RegistrationRequest, SignUpError> {
        let (email, password) = self.basics.credentials()?;
        let raw_years = self.years_experience.trim();
        let years_experience = raw_years
            .parse::<u32>()
            .map_err(|_| SignUpError::InvalidField {
                field: "years of experience",
                input: raw_years.to_owned(),
            })?;

        Ok(RegistrationRequest {
            role: Role::Instructor,
            name: self.basics.full_name(),
            email,
            password,
            details: RegistrationDetails::Teacher {
                institution: self.institution.trim().to_owned(),
                years_experience,
                subjects: self.subjects.clone(),
                qualifications: self.qualifications.clone(),
                bio: optional(&self.bio),
                linkedin: optional(&self.linkedin),
                website: optional(&self.website),
                credential_files: self.uploaded_files.clone(),
            },
            next_page: Page::VerifyEmail,
        })
    }
}
