//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod login_service;
mod password_reset_service;
mod registration_service;
mod state_snapshot_repository;

#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{DEFAULT_LOGIN_LATENCY, FixtureLoginService, LoginService};
#[cfg(test)]
pub use password_reset_service::MockPasswordResetService;
pub use password_reset_service::{FixturePasswordResetService, PasswordResetService};
#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use registration_service::{
    DEFAULT_REGISTRATION_LATENCY, FixtureRegistrationService, RegistrationService,
};
#[cfg(test)]
pub use state_snapshot_repository::MockStateSnapshotRepository;
pub use state_snapshot_repository::{
    FixtureSnapshotRepository, StateSnapshotRepository, StateSnapshotRepositoryError,
};
