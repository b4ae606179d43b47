//! Authentication primitives: email addresses, login credentials, and the
//! sign-in use-cases that drive the store.
//!
//! Inbound form values are validated here before any port is called.

use std::fmt;

use tracing::info;
use zeroize::Zeroizing;

use super::ports::{LoginService, StateSnapshotRepository};
use super::store::Store;
use super::{Error, Page, User};

/// Validation errors for login and sign-up inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email did not look like `local@domain.tld`.
    #[error("'{input}' is not a valid email address")]
    InvalidEmail {
        /// The rejected input.
        input: String,
    },
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// A plausibly well-formed email address.
///
/// The check is shallow: exactly one `@`, a non-empty local part, and a
/// domain with an inner dot. Surrounding whitespace is trimmed.
///
/// # Examples
/// ```
/// use beam::domain::EmailAddress;
///
/// let email = EmailAddress::parse("  alex@example.com ").expect("valid");
/// assert_eq!(email.as_ref(), "alex@example.com");
/// assert!(EmailAddress::parse("alex@localhost").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and normalise an email address.
    ///
    /// # Errors
    ///
    /// Returns [`LoginValidationError::EmptyEmail`] for blank input and
    /// [`LoginValidationError::InvalidEmail`] for anything else malformed.
    pub fn parse(input: &str) -> Result<Self, LoginValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        if is_plausible_email(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(LoginValidationError::InvalidEmail {
                input: trimmed.to_owned(),
            })
        }
    }
}

fn is_plausible_email(input: &str) -> bool {
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || input.contains(char::is_whitespace) {
        return false;
    }
    domain
        .split_once('.')
        .is_some_and(|(host, _)| !host.is_empty())
        && !domain.ends_with('.')
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `email` passes [`EmailAddress::parse`].
/// - `password` is non-empty but keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use beam::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("alex@example.com", "hunter2").expect("valid");
/// assert_eq!(creds.email().as_ref(), "alex@example.com");
/// assert_eq!(creds.password(), "hunter2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    ///
    /// # Errors
    ///
    /// Returns a [`LoginValidationError`] describing the first bad field.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let parsed = EmailAddress::parse(email)?;
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: parsed,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email address used for lookups.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password provided by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Third-party identity providers offered on the login and register pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialProvider {
    /// Google account.
    Google,
    /// GitHub account.
    GitHub,
}

impl SocialProvider {
    /// Lowercase provider name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::GitHub => "github",
        }
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown provider name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown social provider: {input}")]
pub struct ParseSocialProviderError {
    /// The unrecognised input value.
    pub input: String,
}

impl std::str::FromStr for SocialProvider {
    type Err = ParseSocialProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Self::Google),
            "github" => Ok(Self::GitHub),
            other => Err(ParseSocialProviderError {
                input: other.to_owned(),
            }),
        }
    }
}

/// Authenticate with the login form and land on the dashboard.
///
/// # Errors
///
/// Propagates any error from `service`; the store is left untouched.
pub async fn sign_in<R, L>(
    store: &mut Store<R>,
    service: &L,
    credentials: &LoginCredentials,
) -> Result<User, Error>
where
    R: StateSnapshotRepository + ?Sized,
    L: LoginService + ?Sized,
{
    let user = service.sign_in(credentials).await?;
    info!(user_id = %user.id, "signed in");
    enter_dashboard(store, user.clone());
    Ok(user)
}

/// Authenticate through a social provider and land on the dashboard.
///
/// # Errors
///
/// Propagates any error from `service`; the store is left untouched.
pub async fn sign_in_with_provider<R, L>(
    store: &mut Store<R>,
    service: &L,
    provider: SocialProvider,
) -> Result<User, Error>
where
    R: StateSnapshotRepository + ?Sized,
    L: LoginService + ?Sized,
{
    let user = service.sign_in_with_provider(provider).await?;
    info!(user_id = %user.id, %provider, "signed in with provider");
    enter_dashboard(store, user.clone());
    Ok(user)
}

/// Clear the session and return to the landing page.
pub fn sign_out<R: StateSnapshotRepository + ?Sized>(store: &mut Store<R>) {
    store.set_user(None);
    store.set_current_page(Page::Landing);
    info!("signed out");
}

fn enter_dashboard<R: StateSnapshotRepository + ?Sized>(store: &mut Store<R>, user: User) {
    store.set_user(Some(user));
    store.set_current_page(Page::Dashboard);
}
