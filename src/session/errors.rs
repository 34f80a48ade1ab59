//! Session store error types

use thiserror::Error;

/// Result type for session store operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Session store errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A store lock or a session entry lock was poisoned by a panicking
    /// thread; the turn is abandoned rather than run against torn state
    #[error("session store lock poisoned")]
    LockPoisoned,
}
