//! Parent or guardian sign-up: account, relationship, child link.

use super::{
    AccountBasics, ChildLink, RegistrationDetails, RegistrationRequest, SignUpError, StepCounter,
    Wizard, filled, optional, step_gate, terms_gate,
};
use crate::domain::{Page, Role};

/// Relationships offered on step two.
pub const RELATIONSHIPS: [&str; 5] = ["Parent", "Guardian", "Grandparent", "Tutor", "Other"];

/// Child grades offered on step three.
pub const PARENT_GRADES: [&str; 5] = [
    "Elementary (K-5)",
    "Middle School (6-8)",
    "High School (9-12)",
    "College/University",
    "Graduate School",
];

/// How the parent links a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConnectionMethod {
    /// Create a new student account.
    #[default]
    Create,
    /// Link an existing student by code.
    Connect,
}

/// Three-step parent wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentSignUp {
    /// Step one.
    pub basics: AccountBasics,
    /// Optional phone.
    pub phone: String,
    /// Relationship to the child.
    pub relationship: String,
    /// How the child is linked.
    pub connection_method: ConnectionMethod,
    /// Code of an existing student.
    pub student_code: String,
    /// New child's given name.
    pub child_first_name: String,
    /// New child's family name.
    pub child_last_name: String,
    /// New child's optional email.
    pub child_email: String,
    /// New child's grade.
    pub child_grade: String,
    /// Terms accepted.
    pub agree_to_terms: bool,
    progress: StepCounter,
}

impl Default for ParentSignUp {
    fn default() -> Self {
        Self {
            basics: AccountBasics::default(),
            phone: String::new(),
            relationship: String::new(),
            connection_method: ConnectionMethod::default(),
            student_code: String::new(),
            child_first_name: String::new(),
            child_last_name: String::new(),
            child_email: String::new(),
            child_grade: String::new(),
            agree_to_terms: false,
            progress: StepCounter::new(3),
        }
    }
}

impl ParentSignUp {
    /// A parent wizard at step one with the account basics filled in.
    #[must_use]
    pub fn new(basics: AccountBasics) -> Self {
        Self {
            basics,
            ..Self::default()
        }
    }

    fn child_link_complete(&self) -> bool {
        match self.connection_method {
            ConnectionMethod::Connect => filled(&self.student_code),
            ConnectionMethod::Create => {
                filled(&self.child_first_name)
                    && filled(&self.child_last_name)
                    && filled(&self.child_grade)
            }
        }
    }

    fn child_link(&self) -> ChildLink {
        match self.connection_method {
            ConnectionMethod::Connect => ChildLink::Connect {
                student_code: self.student_code.trim().to_owned(),
            },
            ConnectionMethod::Create => ChildLink::Create {
                first_name: self.child_first_name.trim().to_owned(),
                last_name: self.child_last_name.trim().to_owned(),
                email: optional(&self.child_email),
                grade: self.child_grade.trim().to_owned(),
            },
        }
    }
}

impl Wizard for ParentSignUp {
    fn progress(&self) -> StepCounter {
        self.progress
    }

    fn progress_mut(&mut self) -> &mut StepCounter {
        &mut self.progress
    }

    fn check_step(&self, step: u8) -> Result<(), SignUpError> {
        match step {
            1 => step_gate(step, self.basics.is_complete()),
            2 => step_gate(step, filled(&self.relationship)),
            3 => terms_gate(step, self.child_link_complete(), self.agree_to_terms),
            _ => Ok(()),
        }
    }

    fn build(&self) -> Result<RegistrationRequest, SignUpError> {
        let (email, password) = self.basics.credentials()?;
        Ok(RegistrationRequest {
            role: Role::Parent,
            name: self.basics.full_name(),
            email,
            password,
            details: RegistrationDetails::Parent {
                phone: optional(&self.phone),
                relationship: self.relationship.trim().to_owned(),
                child: self.child_link(),
            },
            next_page: Page::VerifyEmail,
        })
    }
}
