//! Error handling for the StyleSync Rust client

use std::fmt;
use thiserror::Error;

/// Unified error type for the StyleSync Rust client
#[derive(Error, Debug)]
pub enum Error {
    /// The server could not be reached at all (DNS, timeout, connection refused)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status outside 200-299; carries the status
    /// code and the response body text
    #[error("request failed with status {status}: {body}")]
    Request { status: u16, body: String },

    /// The response parsed cleanly but reports a logical failure
    /// (`success: false`)
    #[error("application error: {0}")]
    Application(String),

    /// The wardrobe has no items eligible for recommendation; callers should
    /// prompt the user to add items rather than retry
    #[error("no clothing items available to recommend from")]
    EmptyWardrobe,

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Local file access errors (reading an image for upload)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new application error
    pub fn application<T: fmt::Display>(msg: T) -> Self {
        Error::Application(msg.to_string())
    }

    /// Whether the server could not be reached at all
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Whether this failure means the wardrobe is empty
    pub fn is_empty_wardrobe(&self) -> bool {
        matches!(self, Error::EmptyWardrobe)
    }

    /// HTTP status code of a rejected request, if that is what failed
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
