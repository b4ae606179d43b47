//! Page identifiers held in `current_page`.
//!
//! These are the logical screens the store can point at. Mapping them to URL
//! paths is a rendering concern and lives elsewhere.

use serde::{Deserialize, Serialize};

/// A logical screen.
///
/// # Examples
///
/// ```
/// use beam::domain::Page;
///
/// assert_eq!(Page::default(), Page::Landing);
/// assert_eq!("verify-email".parse::<Page>(), Ok(Page::VerifyEmail));
/// assert_eq!(Page::SignUpStudent.as_str(), "signup-student");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// Marketing landing page.
    #[default]
    Landing,
    /// Sign-in form.
    Login,
    /// Simple registration form.
    Register,
    /// Student sign-up wizard.
    #[serde(rename = "signup-student")]
    SignUpStudent,
    /// Teacher sign-up wizard.
    #[serde(rename = "signup-teacher")]
    SignUpTeacher,
    /// Parent sign-up wizard.
    #[serde(rename = "signup-parent")]
    SignUpParent,
    /// Admin sign-up form.
    #[serde(rename = "signup-admin")]
    SignUpAdmin,
    /// Password reset request.
    ForgotPassword,
    /// Email verification.
    VerifyEmail,
    /// First-run onboarding.
    Onboarding,
    /// Learner dashboard.
    Dashboard,
    /// Course explorer.
    Explorer,
    /// Student dashboard.
    StudentDashboard,
    /// Course browsing.
    BrowseCourses,
}

impl Page {
    /// Every page in declaration order.
    pub const ALL: [Self; 14] = [
        Self::Landing,
        Self::Login,
        Self::Register,
        Self::SignUpStudent,
        Self::SignUpTeacher,
        Self::SignUpParent,
        Self::SignUpAdmin,
        Self::ForgotPassword,
        Self::VerifyEmail,
        Self::Onboarding,
        Self::Dashboard,
        Self::Explorer,
        Self::StudentDashboard,
        Self::BrowseCourses,
    ];

    /// Returns the page identifier string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Login => "login",
            Self::Register => "register",
            Self::SignUpStudent => "signup-student",
            Self::SignUpTeacher => "signup-teacher",
            Self::SignUpParent => "signup-parent",
            Self::SignUpAdmin => "signup-admin",
            Self::ForgotPassword => "forgot-password",
            Self::VerifyEmail => "verify-email",
            Self::Onboarding => "onboarding",
            Self::Dashboard => "dashboard",
            Self::Explorer => "explorer",
            Self::StudentDashboard => "student-dashboard",
            Self::BrowseCourses => "browse-courses",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown page identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page: {input}")]
pub struct PageParseError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::str::FromStr for Page {
    type Err = PageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| PageParseError {
                input: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_parses_from_its_identifier() {
        for page in Page::ALL {
            assert_eq!(page.as_str().parse::<Page>(), Ok(page));
        }
    }

    #[test]
    fn serde_uses_the_same_identifiers() {
        for page in Page::ALL {
            let json = serde_json::to_value(page).expect("serialize");
            assert_eq!(json, serde_json::Value::String(page.as_str().to_owned()));
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = "settings".parse::<Page>().expect_err("unknown page");
        assert_eq!(err.to_string(), "unknown page: settings");
    }
}
