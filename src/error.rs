//! Error types for order loading, editing and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for order processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Malformed order document (-3)
    ParseError = -3,
    /// Required field missing (-4)
    MissingField = -4,
    /// Yield absent or below 1 (E100)
    InvalidYield = 100,
    /// Numeric value out of range (E101)
    InvalidValue = 101,
    /// Collection index out of range (E200)
    IndexOutOfRange = 200,
    /// Order failed validation (E300)
    ValidationFailed = 300,
}

/// Main error type for order handling.
#[derive(Debug, Error)]
pub enum CommessaError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid order document at line {line}, column {column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Missing required field '{field}'")]
    MissingField { field: String },

    #[error("Press run {run}: yield must be at least 1")]
    InvalidYield { run: usize },

    #[error("Invalid value for '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("Index {index} out of range for {collection} (len {len})")]
    IndexOutOfRange {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommessaError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CommessaError::FileNotFound { .. } => ErrorCode::FileNotFound,
            CommessaError::EmptyFile { .. } => ErrorCode::EmptyFile,
            CommessaError::Json { .. } => ErrorCode::ParseError,
            CommessaError::MissingField { .. } => ErrorCode::MissingField,
            CommessaError::InvalidYield { .. } => ErrorCode::InvalidYield,
            CommessaError::InvalidValue { .. } => ErrorCode::InvalidValue,
            CommessaError::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
            CommessaError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            CommessaError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

impl From<serde_json::Error> for CommessaError {
    fn from(err: serde_json::Error) -> Self {
        CommessaError::Json {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for order operations.
pub type Result<T> = std::result::Result<T, CommessaError>;
