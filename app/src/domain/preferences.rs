//! Display preferences persisted across sessions.
//!
//! Theme and colour scheme are the only UI choices that survive a restart;
//! both parse from and render to the lowercase strings stored in the slot.

use serde::{Deserialize, Serialize};

/// Light or dark presentation.
///
/// # Examples
///
/// ```
/// # use beam::domain::Theme;
/// assert_eq!(Theme::default(), Theme::Light);
/// assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light backgrounds.
    #[default]
    Light,
    /// Dark backgrounds.
    Dark,
}

impl Theme {
    /// Returns the stored string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParsePreferenceError::new("theme", other)),
        }
    }
}

/// Accent colour family.
///
/// # Examples
///
/// ```
/// # use beam::domain::ColorScheme;
/// assert_eq!(ColorScheme::default(), ColorScheme::Blue);
/// assert_eq!(ColorScheme::Orange.as_str(), "orange");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Blue accents.
    #[default]
    Blue,
    /// Purple accents.
    Purple,
    /// Green accents.
    Green,
    /// Orange accents.
    Orange,
}

impl ColorScheme {
    /// Returns the stored string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Orange => "orange",
        }
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(Self::Blue),
            "purple" => Ok(Self::Purple),
            "green" => Ok(Self::Green),
            "orange" => Ok(Self::Orange),
            other => Err(ParsePreferenceError::new("color scheme", other)),
        }
    }
}

/// Error returned when parsing an unknown preference value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {input}")]
pub struct ParsePreferenceError {
    kind: &'static str,
    /// The unrecognised input value.
    pub input: String,
}

impl ParsePreferenceError {
    pub(crate) fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_owned(),
        }
    }
}
