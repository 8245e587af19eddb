//! Error types used by this crate.

use std::io;

use thiserror::Error;

/// Custom error type returned when a probe, parse or copy goes wrong.
///
/// None of these are fatal to a run: discovery treats them as "this location doesn't apply" and
/// the installer only counts them out of the success total.
#[derive(Error, Debug)]
pub enum ServerIconError {
    /// Error originating from [`io::Error`]
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Error originating from [`serde_json::Error`]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The current user has no resolvable home directory
    #[error("No valid home directory found for the current user")]
    NoHomeDir,
}
