//! Error types for log parsing, report rendering and TTS data conversion

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the report pipeline and the TTS data converter
#[derive(Error, Debug)]
pub enum ReportError {
    /// Malformed input: short row, unparseable number, empty file
    #[error("format error at line {line}: {reason}")]
    Format {
        /// 1-based line number in the input file (0 when the input is empty)
        line: u64,
        /// What was wrong with the line
        reason: String,
    },

    /// A run's evaluator keys do not match the accuracy schema of its group
    #[error("unknown accuracy schema for {name} on {backend}")]
    UnknownSchema {
        /// Test case name of the offending run
        name: String,
        /// Backend of the offending run
        backend: String,
    },

    /// Unreadable input, unwritable output or missing asset
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path that was being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid report configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error while embedding chart data
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ReportError {
    /// Build a format error for the given line
    pub fn format(line: u64, reason: impl Into<String>) -> Self {
        ReportError::Format {
            line,
            reason: reason.into(),
        }
    }

    /// Attach a path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
