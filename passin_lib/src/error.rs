//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors and
/// adding state persistence and input validation failures.
#[derive(Debug)]
pub enum PassinError {
    /// An error from the underlying API client.
    Api(passin_api::Error),
    /// Reading or writing persisted state failed.
    State(String),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for PassinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::State(msg) => write!(f, "State error: {}", msg),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for PassinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<passin_api::Error> for PassinError {
    fn from(e: passin_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for PassinError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

impl From<std::io::Error> for PassinError {
    fn from(e: std::io::Error) -> Self {
        Self::State(e.to_string())
    }
}
