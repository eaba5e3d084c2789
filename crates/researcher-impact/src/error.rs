//! Error types for researcher-impact.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Only the ingestion boundary can fail hard; everything past it degrades to
//! neutral sentinels and per-author error values.

use std::path::PathBuf;

/// Errors from reading input relations.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// Filesystem error while opening or reading a table.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// Table path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A row could not be decoded.
    #[error("Malformed row in {table}: {source}")]
    Csv {
        /// Table file name
        table: String,
        /// Underlying CSV error (carries the line position)
        #[source]
        source: csv::Error,
    },

    /// A required table is absent from the data directory.
    #[error("Required table missing: {}", .0.display())]
    MissingTable(PathBuf),

    /// A blocking loader task panicked or was cancelled.
    #[error("Loader task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl LoadError {
    /// Create an I/O error for a path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Create a CSV decoding error for a table.
    #[must_use]
    pub fn csv(table: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv { table: table.into(), source }
    }

    /// Returns true if this error comes from bad table contents rather than the filesystem.
    #[must_use]
    pub const fn is_malformed_input(&self) -> bool {
        matches!(self, Self::Csv { .. })
    }
}

/// A serialized citation histogram that could not be parsed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HistogramError {
    /// The text is not a `{year: count}` mapping.
    #[error("not a year->count mapping: {0}")]
    Syntax(String),

    /// A key is not an integer year.
    #[error("invalid year key '{0}'")]
    InvalidYear(String),

    /// A value is not a non-negative integer count.
    #[error("invalid count '{count}' for year {year}")]
    InvalidCount {
        /// Year the count belongs to
        year: i32,
        /// Offending value
        count: String,
    },
}

/// Errors from tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Referenced entity is not in the corpus
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal tool logic error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Create a not-found error.
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Convert to a user-friendly error message for the tool response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::NotFound(what) => {
                format!("Not found: {what}. Please check the ID is correct.")
            }
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
