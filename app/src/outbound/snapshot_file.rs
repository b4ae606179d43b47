//! File-backed snapshot slot.
//!
//! Each slot is one `<slot>.json` file inside a state directory. Writes go
//! to a hidden temporary file first and are renamed over the target, so a
//! reader never sees a partial slot.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};
use tracing::debug;

use crate::domain::PersistedState;
use crate::domain::ports::{StateSnapshotRepository, StateSnapshotRepositoryError};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Snapshot slot stored as a JSON file.
///
/// # Examples
///
/// ```
/// use beam::domain::PersistedState;
/// use beam::domain::ports::StateSnapshotRepository;
/// use beam::outbound::FileSnapshotRepository;
/// use camino::Utf8Path;
///
/// let tmp = tempfile::tempdir().expect("temp dir");
/// let dir = Utf8Path::from_path(tmp.path()).expect("utf-8 temp dir");
/// let slot = FileSnapshotRepository::open(dir, "beam-store").expect("open slot");
///
/// assert_eq!(slot.load().expect("load"), None);
/// slot.save(&PersistedState::default()).expect("save");
/// assert_eq!(slot.load().expect("load"), Some(PersistedState::default()));
/// ```
#[derive(Debug)]
pub struct FileSnapshotRepository {
    dir: Dir,
    file_name: String,
    path: Utf8PathBuf,
}

impl FileSnapshotRepository {
    /// Open the slot `slot_name` under `state_dir`, creating the directory
    /// if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StateSnapshotRepositoryError::Io`] if the slot name is not
    /// a plain file name or the directory cannot be created or opened.
    pub fn open(
        state_dir: &Utf8Path,
        slot_name: &str,
    ) -> Result<Self, StateSnapshotRepositoryError> {
        if slot_name.trim().is_empty() {
            return Err(StateSnapshotRepositoryError::io("slot name must not be empty"));
        }
        let file_name = format!("{slot_name}.json");
        let mut components = Utf8Path::new(&file_name).components();
        let (Some(Utf8Component::Normal(_)), None) = (components.next(), components.next())
        else {
            return Err(StateSnapshotRepositoryError::io(format!(
                "slot name must be a plain file name: {slot_name}"
            )));
        };

        Dir::create_ambient_dir_all(state_dir, ambient_authority())
            .map_err(|err| io_error(state_dir, &err))?;
        let dir = Dir::open_ambient_dir(state_dir, ambient_authority())
            .map_err(|err| io_error(state_dir, &err))?;

        Ok(Self {
            dir,
            path: state_dir.join(&file_name),
            file_name,
        })
    }

    /// Full path of the slot file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn write_atomic(&self, contents: &str) -> Result<(), StateSnapshotRepositoryError> {
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let tmp_name = format!(".{}.tmp.{}.{}", self.file_name, std::process::id(), counter);

        if let Err(err) = self.write_temp(&tmp_name, contents) {
            drop(self.dir.remove_file(&tmp_name));
            return Err(io_error(&self.path, &err));
        }
        if let Err(err) = self.dir.rename(&tmp_name, &self.dir, &self.file_name) {
            drop(self.dir.remove_file(&tmp_name));
            return Err(io_error(&self.path, &err));
        }
        Ok(())
    }

    fn write_temp(&self, tmp_name: &str, contents: &str) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        let mut file = self.dir.open_with(tmp_name, &options)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    }
}

fn io_error(path: &Utf8Path, err: &io::Error) -> StateSnapshotRepositoryError {
    StateSnapshotRepositoryError::io(format!("{path}: {err}"))
}

impl StateSnapshotRepository for FileSnapshotRepository {
    fn load(&self) -> Result<Option<PersistedState>, StateSnapshotRepositoryError> {
        match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => PersistedState::decode(&contents)
                .map(Some)
                .map_err(StateSnapshotRepositoryError::from),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path, "snapshot slot is empty");
                Ok(None)
            }
            Err(err) => Err(io_error(&self.path, &err)),
        }
    }

    fn save(&self, state: &PersistedState) -> Result<(), StateSnapshotRepositoryError> {
        let encoded = state.encode()?;
        self.write_atomic(&encoded)
    }
}
