use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tweetbox_types::Session;

/// Reads the session written by the auth provider.
///
/// The file holds `{ "user": { "name": ..., "image": ... } }`. This client
/// only ever reads it; signing in and out is the provider's job.
#[derive(Debug, Clone)]
pub struct SessionStore {
    file_path: PathBuf,
}

impl SessionStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Loads the session from the file.
    ///
    /// - `Ok(Some(session))` if the file exists and parses
    /// - `Ok(None)` if the file is missing, empty, or corrupted
    /// - `Err(_)` if the file exists but cannot be read
    pub fn load(&self) -> Result<Option<Session>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.file_path)
            .context("Failed to read session file")?;

        if content.trim().is_empty() {
            log::warn!("Session file is empty, treating as no session");
            return Ok(None);
        }

        match serde_json::from_str::<Session>(&content) {
            Ok(session) => {
                log::debug!("Loaded session from {}", self.file_path.display());
                Ok(Some(session))
            }
            Err(e) => {
                log::warn!("Session file is corrupted ({}), treating as no session", e);
                Ok(None)
            }
        }
    }
}

/// Session sources from the command line and environment
#[derive(Debug, Clone, Default)]
pub struct SessionOverrides {
    pub user: Option<String>,
    pub avatar: Option<String>,
    pub anonymous: bool,
}

/// Pick the session: `--anonymous` wins, then `--user`, then the session file
pub fn resolve_session(overrides: &SessionOverrides, store: &SessionStore) -> Result<Option<Session>> {
    if overrides.anonymous {
        return Ok(None);
    }

    if let Some(name) = &overrides.user {
        return Ok(Some(Session::for_user(name.clone(), overrides.avatar.clone())));
    }

    store.load()
}
