//! Beam client state and UI-flow logic.
//!
//! The [`domain`] module holds the state container and every screen's
//! rules; [`outbound`] provides the file-backed snapshot slot; [`config`]
//! loads runtime settings.

pub mod config;
pub mod domain;
pub mod outbound;
