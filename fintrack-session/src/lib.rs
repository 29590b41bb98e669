//! Read-only access to the session written by the tracker's login flow.
//!
//! Logging in happens elsewhere; this crate only turns the persisted session
//! into a [`SessionContext`] that callers pass around explicitly.

mod context;
mod error;
mod models;
mod store;

pub use context::SessionContext;
pub use error::SessionError;
pub use models::StoredSession;
pub use store::SessionStore;

use std::path::PathBuf;

/// Loads the session from `path`, or from the default cache location.
///
/// A missing session file is not an error: the context simply carries no
/// token and no user.
pub fn load_session(path: Option<PathBuf>) -> Result<SessionContext, SessionError> {
    let store = match path {
        Some(path) => SessionStore::with_path(path),
        None => SessionStore::new()?,
    };
    store.load()
}
