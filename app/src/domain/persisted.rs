//! The persisted snapshot of the store.
//!
//! Only four fields survive a restart. They are written as
//! `{"state": {...}, "version": 0}` so existing browser slots stay readable.
//! The version is written but never checked.

use serde::{Deserialize, Serialize};

use super::{ColorScheme, Theme, User};

/// Version written into every slot.
pub const SNAPSHOT_VERSION: u32 = 0;

/// Default slot name.
pub const DEFAULT_SLOT_NAME: &str = "beam-store";

/// The subset of store state that is persisted.
///
/// Missing fields fall back to their defaults when decoding, so a slot
/// written by an older build still rehydrates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    /// Selected theme.
    pub theme: Theme,
    /// Selected colour scheme.
    pub color_scheme: ColorScheme,
    /// Signed-in user.
    pub user: Option<User>,
    /// Authentication flag as last written.
    pub is_authenticated: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<S> {
    state: S,
    #[serde(default)]
    version: u32,
}

impl PersistedState {
    /// Encodes the state inside the slot envelope.
    ///
    /// # Errors
    ///
    /// Returns a serialisation error if the state cannot be encoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use beam::domain::{PersistedState, Theme};
    ///
    /// let state = PersistedState { theme: Theme::Dark, ..PersistedState::default() };
    /// let json = state.encode().expect("encodes");
    /// assert!(json.contains("\"version\":0"));
    /// assert_eq!(PersistedState::decode(&json).expect("decodes"), state);
    /// ```
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Envelope {
            state: self,
            version: SNAPSHOT_VERSION,
        })
    }

    /// Decodes a slot envelope.
    ///
    /// # Errors
    ///
    /// Returns a serialisation error for malformed JSON or a missing `state`
    /// key.
    pub fn decode(json: &str) -> Result<Self, serde_json::Error> {
        let envelope: Envelope<Self> = serde_json::from_str(json)?;
        Ok(envelope.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn alex() -> User {
        User {
            id: "1".to_owned(),
            name: "Alex Chen".to_owned(),
            email: "alex@example.com".to_owned(),
            role: Role::Learner,
            avatar: None,
            xp: 2450,
            level: 3,
            streak: 7,
            badges: vec!["first-course".to_owned()],
            enrolled_courses: vec!["1".to_owned(), "2".to_owned()],
            created_courses: vec![],
        }
    }

    #[test]
    fn envelope_format_is_stable() {
        let state = PersistedState {
            theme: Theme::Dark,
            color_scheme: ColorScheme::Purple,
            user: None,
            is_authenticated: false,
        };
        let value: serde_json::Value =
            serde_json::from_str(&state.encode().expect("encode")).expect("valid JSON");

        insta::assert_json_snapshot!(value, @r#"
        {
          "state": {
            "colorScheme": "purple",
            "isAuthenticated": false,
            "theme": "dark",
            "user": null
          },
          "version": 0
        }
        "#);
    }

    #[test]
    fn round_trip_preserves_user() {
        let state = PersistedState {
            theme: Theme::Light,
            color_scheme: ColorScheme::Green,
            user: Some(alex()),
            is_authenticated: true,
        };
        let decoded = PersistedState::decode(&state.encode().expect("encode")).expect("decode");
        assert_eq!(decoded, state);
    }

    #[test]
    fn partial_state_fills_defaults() {
        let decoded =
            PersistedState::decode(r#"{"state":{"theme":"dark"}}"#).expect("partial decodes");
        assert_eq!(decoded.theme, Theme::Dark);
        assert_eq!(decoded.color_scheme, ColorScheme::Blue);
        assert!(decoded.user.is_none());
        assert!(!decoded.is_authenticated);
    }

    #[test]
    fn authentication_flag_is_taken_as_stored() {
        let decoded = PersistedState::decode(r#"{"state":{"user":null,"isAuthenticated":true}}"#)
            .expect("decodes");
        assert!(decoded.is_authenticated);
        assert!(decoded.user.is_none());
    }

    #[test]
    fn malformed_slot_is_an_error() {
        assert!(PersistedState::decode("{\"state\":").is_err());
        assert!(PersistedState::decode("{\"version\":0}").is_err());
    }
}
