//! Error types for the SimpsonsUA plugin
//!
//! This module defines all error types used throughout the library.
//! SimpsonsError implements Serialize for Tauri compatibility.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for SimpsonsUA plugin operations
#[derive(Error, Debug)]
pub enum SimpsonsError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Requested page was not found (HTTP 404)
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Server answered with a status that carries no page (e.g. an unfollowed redirect)
    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    /// The host could not extract a playable stream from a player source
    #[error("{0}")]
    Extraction(String),

    /// Playback failed; the message is already shortened for notifications
    #[error("{0}")]
    Playback(String),
}

impl From<url::ParseError> for SimpsonsError {
    fn from(err: url::ParseError) -> Self {
        SimpsonsError::InvalidUrl(err.to_string())
    }
}

/// Serialize SimpsonsError as a string for Tauri compatibility
impl Serialize for SimpsonsError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for SimpsonsUA plugin operations
pub type Result<T> = std::result::Result<T, SimpsonsError>;
