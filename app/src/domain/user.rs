//! User data model and experience arithmetic.

use seed_data::{RoleSeed, UserSeed};
use serde::{Deserialize, Serialize};

/// Experience points needed to climb one level.
pub const XP_PER_LEVEL: u64 = 1_000;

/// Level reached with `xp` experience points.
///
/// Level one covers `0..1000`, level two `1000..2000`, and so on. There is
/// no cap.
///
/// # Examples
///
/// ```
/// use beam::domain::level_for_xp;
///
/// assert_eq!(level_for_xp(0), 1);
/// assert_eq!(level_for_xp(999), 1);
/// assert_eq!(level_for_xp(1_050), 2);
/// ```
#[must_use]
pub const fn level_for_xp(xp: u64) -> u64 {
    xp.div_euclid(XP_PER_LEVEL) + 1
}

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Takes courses. Student sign-ups become learners.
    Learner,
    /// Authors courses. Teacher sign-ups become instructors.
    Instructor,
    /// Follows a learner's progress.
    Parent,
    /// Operates the platform.
    Admin,
}

impl Role {
    /// Returns the serialised string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Learner => "learner",
            Self::Instructor => "instructor",
            Self::Parent => "parent",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RoleSeed> for Role {
    fn from(value: RoleSeed) -> Self {
        match value {
            RoleSeed::Learner => Self::Learner,
            RoleSeed::Instructor => Self::Instructor,
        }
    }
}

/// A signed-in account.
///
/// `level` is stored rather than derived so that the store can tell when an
/// experience award crosses a boundary. The store keeps it equal to
/// [`level_for_xp`] after every award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account identifier.
    pub id: String,
    /// Full display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Optional avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Experience points.
    pub xp: u64,
    /// Stored level.
    pub level: u64,
    /// Consecutive learning days.
    pub streak: u32,
    /// Earned badge identifiers in award order.
    #[serde(default)]
    pub badges: Vec<String>,
    /// Enrolled course identifiers in enrolment order.
    #[serde(default)]
    pub enrolled_courses: Vec<String>,
    /// Authored course identifiers.
    #[serde(default)]
    pub created_courses: Vec<String>,
}

impl User {
    /// Returns `true` if the user is enrolled in `course_id`.
    #[must_use]
    pub fn is_enrolled(&self, course_id: &str) -> bool {
        self.enrolled_courses.iter().any(|id| id == course_id)
    }

    /// First word of the display name, if any.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.name.split_whitespace().next()
    }
}

impl From<&UserSeed> for User {
    fn from(seed: &UserSeed) -> Self {
        Self {
            id: seed.id.clone(),
            name: seed.name.clone(),
            email: seed.email.clone(),
            role: seed.role.into(),
            avatar: seed.avatar.clone(),
            xp: seed.xp,
            level: seed.level,
            streak: seed.streak,
            badges: seed.badges.clone(),
            enrolled_courses: seed.enrolled_courses.clone(),
            created_courses: seed.created_courses.clone(),
        }
    }
}
