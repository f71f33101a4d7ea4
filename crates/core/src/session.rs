// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session lifecycle: login, resume, and durable persistence.
//!
//! A [`Session`] is created by a successful login, stored under a fixed key,
//! and refreshed at startup by exchanging its refresh token. A failed resume
//! clears the stored session; callers then run signed out (demo mode).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::{Storage, SESSION_KEY};
use crate::sync::{Transport, TransportError};

/// Identity plus access credentials for one account's repository.
///
/// Field names match the `createSession` response body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Stable account id (DID); also the repository id.
    pub did: String,
    pub handle: String,
    pub access_jwt: String,
    pub refresh_jwt: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("did", &self.did)
            .field("handle", &self.handle)
            .field("access_jwt", &"<redacted>")
            .field("refresh_jwt", &"<redacted>")
            .finish()
    }
}

/// Durable home of the current session.
pub trait SessionStore {
    fn load_session(&self) -> Result<Option<Session>>;
    fn save_session(&self, session: &Session) -> Result<()>;
    fn clear_session(&self) -> Result<()>;
}

impl SessionStore for Storage {
    fn load_session(&self) -> Result<Option<Session>> {
        self.get_json(SESSION_KEY)
    }

    fn save_session(&self, session: &Session) -> Result<()> {
        self.set_json(SESSION_KEY, session)
    }

    fn clear_session(&self) -> Result<()> {
        self.remove(SESSION_KEY).map(|_| ())
    }
}

/// Trims whitespace and a leading `@` from a handle.
pub fn normalize_identifier(identifier: &str) -> String {
    let trimmed = identifier.trim();
    trimmed.strip_prefix('@').unwrap_or(trimmed).to_string()
}

/// Maps a failed `createSession` call to the sign-in error taxonomy.
fn login_error(err: TransportError) -> Error {
    match err {
        TransportError::Status { status: 400 | 401 | 403, message, .. } => Error::Auth(message),
        other => other.into(),
    }
}

/// Supplies sessions to the rest of the crate.
pub struct SessionProvider<'a, S: SessionStore> {
    transport: &'a dyn Transport,
    store: &'a S,
}

impl<'a, S: SessionStore> SessionProvider<'a, S> {
    pub fn new(transport: &'a dyn Transport, store: &'a S) -> Self {
        SessionProvider { transport, store }
    }

    /// Exchanges credentials for a new session and persists it.
    ///
    /// Fails with [`Error::Auth`] on rejected credentials and
    /// [`Error::Network`] when the server is unreachable.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<Session> {
        let identifier = normalize_identifier(identifier);
        tracing::debug!(%identifier, "creating session");
        let session =
            self.transport.create_session(&identifier, password).await.map_err(login_error)?;
        self.store.save_session(&session)?;
        Ok(session)
    }

    /// Refreshes a stored session, persisting the new tokens.
    pub async fn try_resume(&self, stored: &Session) -> Result<Session> {
        let session = self.transport.refresh_session(&stored.refresh_jwt).await?;
        self.store.save_session(&session)?;
        Ok(session)
    }

    /// Refreshes a stored session; on any failure clears storage and returns `None`.
    pub async fn resume(&self, stored: &Session) -> Option<Session> {
        match self.try_resume(stored).await {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(did = %stored.did, error = %e, "session resume failed");
                if let Err(e) = self.store.clear_session() {
                    tracing::warn!(error = %e, "failed to clear stored session");
                }
                None
            }
        }
    }

    /// Reads the persisted session; absent or unreadable reads as `None`.
    pub fn load(&self) -> Option<Session> {
        match self.store.load_session() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable stored session");
                None
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        self.store.save_session(session)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.clear_session()
    }

    /// Loads the persisted session and resumes it.
    pub async fn restore(&self) -> Option<Session> {
        let stored = self.load()?;
        self.resume(&stored).await
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
