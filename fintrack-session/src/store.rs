use crate::context::SessionContext;
use crate::error::SessionError;
use crate::models::StoredSession;
use chrono::{Duration, Utc};
use std::fs;
use std::path::PathBuf;

const EXPIRY_BUFFER: Duration = Duration::minutes(1);

pub struct SessionStore {
    session_path: PathBuf,
}

impl SessionStore {
    pub fn new() -> Result<Self, SessionError> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| {
                SessionError::Configuration("could not determine cache directory".to_string())
            })?
            .join("fintrack");
        Ok(Self::with_path(cache_dir.join("session.json")))
    }

    pub fn with_path(session_path: PathBuf) -> Self {
        Self { session_path }
    }

    pub fn load(&self) -> Result<SessionContext, SessionError> {
        if !self.session_path.exists() {
            tracing::info!(path = %self.session_path.display(), "No session file found");
            return Ok(SessionContext::anonymous());
        }

        let json = fs::read_to_string(&self.session_path)?;
        let session: StoredSession = serde_json::from_str(&json)?;

        let token = if self.is_expired(&session) {
            tracing::warn!("Stored session token has expired, continuing without it");
            None
        } else {
            session.token
        };

        Ok(SessionContext::new(token, session.email))
    }

    pub fn is_expired(&self, session: &StoredSession) -> bool {
        match session.expires_at {
            Some(expires_at) => expires_at <= Utc::now() + EXPIRY_BUFFER,
            None => false,
        }
    }
}
