//! CLI-specific error types
//!
//! Everything that escapes to `main` is fatal: print and exit non-zero.

use std::fmt;
use std::io;

use crate::dataset::DatasetError;
use crate::orchestrator::TurnError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Dataset failed to load or validate
    DatasetError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Server failed to start or crashed
    ServerError,
    /// Interactive game failed
    GameError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::DatasetError => "MIND_CLI_DATASET_ERROR",
            Self::IoError => "MIND_CLI_IO_ERROR",
            Self::ServerError => "MIND_CLI_SERVER_ERROR",
            Self::GameError => "MIND_CLI_GAME_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Server error
    pub fn server_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServerError, msg)
    }

    /// Game error
    pub fn game_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::GameError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<DatasetError> for CliError {
    fn from(e: DatasetError) -> Self {
        Self::new(CliErrorCode::DatasetError, e.to_string())
    }
}

impl From<TurnError> for CliError {
    fn from(e: TurnError) -> Self {
        Self::game_error(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
