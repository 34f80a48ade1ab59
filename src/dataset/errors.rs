//! Dataset error types
//!
//! All dataset errors are fatal: a malformed dataset refuses to start the
//! process rather than serving guesses against a broken table.

use std::fmt;
use std::io;

/// Dataset error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetErrorCode {
    /// File could not be read
    Io,
    /// Header row missing or unusable
    MissingHeader,
    /// No candidate rows
    Empty,
    /// No feature columns
    NoFeatures,
    /// Feature name appears more than once
    DuplicateFeature,
    /// Row has the wrong number of columns
    RaggedRow,
    /// Feature value other than 0 or 1
    NotBinary,
}

impl DatasetErrorCode {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io => "MIND_DATASET_IO",
            Self::MissingHeader => "MIND_DATASET_MISSING_HEADER",
            Self::Empty => "MIND_DATASET_EMPTY",
            Self::NoFeatures => "MIND_DATASET_NO_FEATURES",
            Self::DuplicateFeature => "MIND_DATASET_DUPLICATE_FEATURE",
            Self::RaggedRow => "MIND_DATASET_RAGGED_ROW",
            Self::NotBinary => "MIND_DATASET_NOT_BINARY",
        }
    }
}

impl fmt::Display for DatasetErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Dataset error with code and context
#[derive(Debug)]
pub struct DatasetError {
    code: DatasetErrorCode,
    message: String,
}

impl DatasetError {
    /// Create a new dataset error
    pub fn new(code: DatasetErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// File read failure
    pub fn io(path: impl fmt::Display, err: &io::Error) -> Self {
        Self::new(
            DatasetErrorCode::Io,
            format!("failed to read '{}': {}", path, err),
        )
    }

    /// Header row missing
    pub fn missing_header(path: impl fmt::Display) -> Self {
        Self::new(
            DatasetErrorCode::MissingHeader,
            format!("'{}' has no header row", path),
        )
    }

    /// No candidate rows
    pub fn empty() -> Self {
        Self::new(DatasetErrorCode::Empty, "dataset has no candidates")
    }

    /// No feature columns
    pub fn no_features() -> Self {
        Self::new(
            DatasetErrorCode::NoFeatures,
            "dataset has no feature columns beyond the label",
        )
    }

    /// Duplicate feature column
    pub fn duplicate_feature(name: &str) -> Self {
        Self::new(
            DatasetErrorCode::DuplicateFeature,
            format!("feature column '{}' appears more than once", name),
        )
    }

    /// Row column count mismatch
    pub fn ragged_row(line: usize, expected: usize, got: usize) -> Self {
        Self::new(
            DatasetErrorCode::RaggedRow,
            format!(
                "line {}: expected {} columns, got {}",
                line, expected, got
            ),
        )
    }

    /// Non-binary feature value
    pub fn not_binary(line: usize, feature: &str, value: &str) -> Self {
        Self::new(
            DatasetErrorCode::NotBinary,
            format!(
                "line {}: feature '{}' has non-binary value '{}'",
                line, feature, value
            ),
        )
    }

    /// Returns the error code
    pub fn code(&self) -> DatasetErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for DatasetError {}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DatasetErrorCode::Io.code(), "MIND_DATASET_IO");
        assert_eq!(DatasetErrorCode::Empty.code(), "MIND_DATASET_EMPTY");
        assert_eq!(
            DatasetErrorCode::NotBinary.code(),
            "MIND_DATASET_NOT_BINARY"
        );
    }

    #[test]
    fn test_display_includes_context() {
        let err = DatasetError::not_binary(3, "furry", "2");
        let display = format!("{}", err);
        assert!(display.contains("MIND_DATASET_NOT_BINARY"));
        assert!(display.contains("furry"));
        assert!(display.contains("line 3"));
    }
}
