//! Turn orchestration error types

use thiserror::Error;

use crate::session::SessionError;

/// Result type for turn processing
pub type TurnResult<T> = Result<T, TurnError>;

/// Turn processing errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TurnError {
    /// Session store failure
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A pending question names a feature the dataset does not have.
    /// Cannot happen while the dataset is immutable for the process
    /// lifetime; surfaced as an error rather than a panic regardless.
    #[error("pending feature '{0}' not present in dataset")]
    UnknownFeature(String),
}
