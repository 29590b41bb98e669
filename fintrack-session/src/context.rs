use secrecy::{ExposeSecret, SecretString};

/// Credentials for the current user, passed explicitly to anything that
/// talks to the tracker backend.
#[derive(Debug, Default)]
pub struct SessionContext {
    token: Option<SecretString>,
    user: Option<String>,
}

impl SessionContext {
    pub fn new(token: Option<String>, user: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()).map(SecretString::from),
            user: user.filter(|u| !u.is_empty()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.expose_secret())
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Identifier of the logged-in user (their email address).
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}
