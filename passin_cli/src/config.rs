//! Environment-driven configuration: API base URL and state directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use passin_lib::{AuthSession, Client, FileLocation};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

pub struct Config {
    pub base_url: String,
    pub state_dir: PathBuf,
}

impl Config {
    /// Reads `PASSIN_API_URL` and `PASSIN_STATE_DIR` from the environment,
    /// falling back to the local development API and `~/.passin`.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("PASSIN_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let state_dir = match std::env::var("PASSIN_STATE_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => {
                let home = std::env::var("HOME")
                    .context("HOME is not set; set PASSIN_STATE_DIR instead")?;
                PathBuf::from(home).join(".passin")
            }
        };
        std::fs::create_dir_all(&state_dir)
            .with_context(|| format!("failed to create state directory {}", state_dir.display()))?;
        Ok(Self {
            base_url,
            state_dir,
        })
    }

    /// API client, with the stored bearer token attached when a session is
    /// active.
    pub fn client(&self) -> Client {
        let client = Client::with_base_url(&self.base_url);
        match self.auth_session().token() {
            Some(token) => client.with_token(&token),
            None => client,
        }
    }

    pub fn auth_session(&self) -> AuthSession {
        AuthSession::new(self.state_dir.join("session.json"))
    }

    /// Persisted browse location for a collection, the CLI's address bar.
    pub fn location(&self, collection: &str) -> FileLocation {
        FileLocation::open(self.state_dir.join(format!("{}.location", collection)))
    }
}
