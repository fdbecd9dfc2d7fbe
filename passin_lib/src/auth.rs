//! Persisted login sessions.

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use passin_api::types::AuthPayload;

use crate::error::PassinError;

/// Session lifetime in minutes, matching the original 30-minute cookie.
const SESSION_TTL_MINUTES: i64 = 30;

/// Login payload persisted to disk, with the time it was saved.
#[derive(Serialize, Deserialize)]
pub struct StoredSession {
    pub payload: AuthPayload,
    pub saved_at: DateTime<Utc>,
}

/// File-backed login session store.
pub struct AuthSession {
    path: PathBuf,
}

impl AuthSession {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Persists a login payload with the current timestamp.
    pub fn save(&self, payload: &AuthPayload) -> Result<(), PassinError> {
        let stored = StoredSession {
            payload: payload.clone(),
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Loads the stored session, if present and unexpired.
    pub fn load(&self) -> Option<StoredSession> {
        let json = std::fs::read_to_string(&self.path).ok()?;
        let stored: StoredSession = match serde_json::from_str(&json) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Discarding unreadable session file: {}", e);
                return None;
            }
        };
        let age = Utc::now().signed_duration_since(stored.saved_at);
        if age > Duration::minutes(SESSION_TTL_MINUTES) {
            return None;
        }
        Some(stored)
    }

    /// Bearer token for the current session, if any.
    pub fn token(&self) -> Option<String> {
        self.load().map(|s| s.payload.token)
    }

    /// Removes the stored session. Removing an absent session is fine.
    pub fn clear(&self) -> Result<(), PassinError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
