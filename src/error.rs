//! Error types for MNA Print.
//!
//! Formatting itself never fails: empty or absent inputs render as an empty
//! string. The errors here come from building matrices out of nested rows,
//! reading snapshot files, and writing to an output sink.

use thiserror::Error;

/// Result type alias using [`MnaPrintError`].
pub type Result<T> = std::result::Result<T, MnaPrintError>;

/// Unified error type for all MNA Print operations.
#[derive(Error, Debug)]
pub enum MnaPrintError {
    // ============ Snapshot Parsing Errors ============
    /// Error while parsing a snapshot file
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// The same section appears twice in one snapshot
    #[error("Duplicate section '.{section}' at line {line}")]
    DuplicateSection { line: usize, section: String },

    // ============ Data Errors ============
    /// Matrix rows do not all have the same length
    #[error("Ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    // ============ I/O Errors ============
    /// Error reading a snapshot file
    #[error("Failed to read snapshot file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing formatted output
    #[error("Failed to write output: {source}")]
    Output {
        #[from]
        source: std::io::Error,
    },
}

impl MnaPrintError {
    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create a ragged matrix error
    pub fn ragged(row: usize, expected: usize, found: usize) -> Self {
        Self::RaggedMatrix {
            row,
            expected,
            found,
        }
    }

    /// Line number the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::ParseError { line, .. } | Self::DuplicateSection { line, .. } => Some(*line),
            _ => None,
        }
    }
}
