//! Session storage
//!
//! Process-wide mapping from opaque session keys to live game state.
//!
//! ## Invariants
//! - SESS-1: updates to one session are serialized (entry mutex held for
//!   the whole turn); unrelated sessions proceed concurrently
//! - SESS-2: `create` fully replaces prior state, it never merges
//! - SESS-3: a removed session is gone; the next contact starts fresh

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, RwLock};

use super::errors::{SessionError, SessionResult};
use super::state::SessionState;

/// Opaque session identifier.
///
/// Constructed once at the transport boundary; the core never parses
/// path-like strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to one session's state.
///
/// Callers lock the handle for the duration of a turn, which is what
/// serializes concurrent turns on the same key.
pub type SessionHandle = Arc<Mutex<SessionState>>;

/// Session store operations
pub trait SessionStore: Send + Sync {
    /// Inserts fresh state for the key, replacing any prior state.
    fn create(&self, key: &SessionKey, state: SessionState) -> SessionResult<SessionHandle>;

    /// Fetches the live handle for a key, if one exists.
    fn fetch(&self, key: &SessionKey) -> SessionResult<Option<SessionHandle>>;

    /// Removes a session. Returns whether one existed.
    fn remove(&self, key: &SessionKey) -> SessionResult<bool>;

    /// Number of live sessions.
    ///
    /// Sessions have no expiry, so this is also the leak gauge.
    fn session_count(&self) -> SessionResult<usize>;
}

/// In-memory session store.
///
/// The map itself is guarded by an `RwLock` held only long enough to look
/// up or replace an entry; per-session serialization comes from the entry
/// mutex in [`SessionHandle`].
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionKey, SessionHandle>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn create(&self, key: &SessionKey, state: SessionState) -> SessionResult<SessionHandle> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| SessionError::LockPoisoned)?;
        let handle: SessionHandle = Arc::new(Mutex::new(state));
        sessions.insert(key.clone(), handle.clone());
        Ok(handle)
    }

    fn fetch(&self, key: &SessionKey) -> SessionResult<Option<SessionHandle>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| SessionError::LockPoisoned)?;
        Ok(sessions.get(key).cloned())
    }

    fn remove(&self, key: &SessionKey) -> SessionResult<bool> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| SessionError::LockPoisoned)?;
        Ok(sessions.remove(key).is_some())
    }

    fn session_count(&self) -> SessionResult<usize> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| SessionError::LockPoisoned)?;
        Ok(sessions.len())
    }
}
