use std::path::{Path, PathBuf};

use super::{Session, SessionError};

/// keeps the current [`Session`] in a JSON file between invocations.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> SessionStore {
        SessionStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// reads the stored session. a missing file means nobody is logged in.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents =
            std::fs::read_to_string(&self.path).map_err(|source| SessionError::ReadError {
                filepath: self.filepath(),
                source,
            })?;
        let session: Session =
            serde_json::from_str(&contents).map_err(|e| SessionError::MalformedSession {
                filepath: self.filepath(),
                reason: e.to_string(),
            })?;
        if session.email.trim().is_empty() {
            return Err(SessionError::MalformedSession {
                filepath: self.filepath(),
                reason: String::from("email is empty"),
            });
        }
        Ok(Some(session))
    }

    /// the stored session, or [`SessionError::NotLoggedIn`]
    pub fn require(&self) -> Result<Session, SessionError> {
        self.load()?.ok_or(SessionError::NotLoggedIn)
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SessionError::WriteError {
                filepath: self.filepath(),
                source,
            })?;
        }
        let contents =
            serde_json::to_string_pretty(session).map_err(|e| SessionError::MalformedSession {
                filepath: self.filepath(),
                reason: e.to_string(),
            })?;
        std::fs::write(&self.path, contents).map_err(|source| SessionError::WriteError {
            filepath: self.filepath(),
            source,
        })?;
        log::debug!("saved session for {} to {}", session.email, self.filepath());
        Ok(())
    }

    /// removes the stored session. returns false if there was none.
    pub fn clear(&self) -> Result<bool, SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(SessionError::WriteError {
                filepath: self.filepath(),
                source,
            }),
        }
    }

    fn filepath(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}
