//! Runtime settings loaded via OrthoConfig.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{DEFAULT_LEADERBOARD_SEED, DEFAULT_SLOT_NAME};

const DEFAULT_STATE_DIR: &str = ".beam";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Human-readable single-line events.
    #[default]
    Compact,
}

/// Error returned for an unknown log format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log format: {input} (expected `json` or `compact`)")]
pub struct ParseLogFormatError {
    /// The rejected value.
    pub input: String,
}

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "compact" => Ok(Self::Compact),
            _ => Err(ParseLogFormatError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Settings for the `beam` binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BEAM")]
pub struct BeamSettings {
    /// Directory holding the snapshot slot files.
    pub state_dir: Option<PathBuf>,
    /// Name of the snapshot slot.
    pub slot_name: Option<String>,
    /// Named leaderboard seed from the catalogue.
    pub leaderboard_seed: Option<String>,
    /// Catalogue file to load instead of the built-in one.
    pub catalogue_path: Option<PathBuf>,
    /// Override for every simulated service delay, in milliseconds.
    pub simulated_latency_ms: Option<u64>,
    /// `json` or `compact`.
    #[ortho_config(default = "compact".to_owned())]
    pub log_format: String,
}

impl BeamSettings {
    /// Return the configured state directory, falling back to `.beam`.
    #[must_use]
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
    }

    /// Return the configured slot name, falling back to the default.
    #[must_use]
    pub fn slot_name(&self) -> &str {
        self.slot_name.as_deref().unwrap_or(DEFAULT_SLOT_NAME)
    }

    /// Return the configured leaderboard seed, falling back to the default.
    #[must_use]
    pub fn leaderboard_seed(&self) -> &str {
        self.leaderboard_seed
            .as_deref()
            .unwrap_or(DEFAULT_LEADERBOARD_SEED)
    }

    /// Simulated latency override, if configured.
    #[must_use]
    pub fn simulated_latency(&self) -> Option<Duration> {
        self.simulated_latency_ms.map(Duration::from_millis)
    }

    /// Parsed log format.
    ///
    /// # Errors
    ///
    /// Returns [`ParseLogFormatError`] for an unrecognised value.
    pub fn log_format(&self) -> Result<LogFormat, ParseLogFormatError> {
        self.log_format.parse()
    }
}
