//! Port for the persisted snapshot slot.
//!
//! The slot is a single named key-value entry, read once when the store is
//! built and overwritten after every store operation. Reads and writes are
//! synchronous, like the browser storage they stand in for.

use std::sync::{Arc, Mutex};

use crate::domain::PersistedState;

use super::define_port_error;

define_port_error! {
    /// Errors raised by snapshot slot adapters.
    pub enum StateSnapshotRepositoryError {
        /// The slot could not be read or written.
        Io { message: String } => "snapshot slot I/O failed: {message}",
        /// The slot contents could not be encoded or decoded.
        Serialization { message: String } =>
            "snapshot slot serialization failed: {message}",
    }
}

impl From<serde_json::Error> for StateSnapshotRepositoryError {
    fn from(value: serde_json::Error) -> Self {
        Self::serialization(value.to_string())
    }
}

/// Port for loading and saving the persisted snapshot.
#[cfg_attr(test, mockall::automock)]
pub trait StateSnapshotRepository: Send + Sync {
    /// Read the slot.
    ///
    /// Returns `None` when nothing has been written yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the slot cannot be read or decoded.
    fn load(&self) -> Result<Option<PersistedState>, StateSnapshotRepositoryError>;

    /// Overwrite the slot.
    ///
    /// # Errors
    ///
    /// Returns an error when the slot cannot be encoded or written.
    fn save(&self, state: &PersistedState) -> Result<(), StateSnapshotRepositoryError>;
}

/// In-memory slot holding the encoded envelope.
///
/// Clones share the same slot, so a test can keep a handle and inspect what
/// the store wrote.
///
/// # Examples
///
/// ```
/// use beam::domain::PersistedState;
/// use beam::domain::ports::{FixtureSnapshotRepository, StateSnapshotRepository};
///
/// let slot = FixtureSnapshotRepository::default();
/// assert_eq!(slot.load().expect("readable"), None);
/// slot.save(&PersistedState::default()).expect("writable");
/// assert!(slot.contents().expect("written").contains("\"version\":0"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixtureSnapshotRepository {
    slot: Arc<Mutex<Option<String>>>,
}

impl FixtureSnapshotRepository {
    /// Seed the slot with raw contents, valid or not.
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(contents.into()))),
        }
    }

    /// Raw slot contents, if any.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|guard| guard.clone())
    }
}

impl StateSnapshotRepository for FixtureSnapshotRepository {
    fn load(&self) -> Result<Option<PersistedState>, StateSnapshotRepositoryError> {
        let guard = self
            .slot
            .lock()
            .map_err(|err| StateSnapshotRepositoryError::io(err.to_string()))?;
        guard
            .as_deref()
            .map(PersistedState::decode)
            .transpose()
            .map_err(StateSnapshotRepositoryError::from)
    }

    fn save(&self, state: &PersistedState) -> Result<(), StateSnapshotRepositoryError> {
        let encoded = state.encode()?;
        let mut guard = self
            .slot
            .lock()
            .map_err(|err| StateSnapshotRepositoryError::io(err.to_string()))?;
        *guard = Some(encoded);
        Ok(())
    }
}
