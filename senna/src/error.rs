//! Error types for Senna.

use thiserror::Error;

/// Result type alias using [`SennaError`].
pub type Result<T> = std::result::Result<T, SennaError>;

/// The unified error type for all Senna operations.
///
/// Two anomalies deliberately have no variant here: a corpus line with a
/// missing or unparseable score is recovered by skipping it during loading,
/// and a word absent from the index is a normal lookup result communicated as
/// `None`, never as an error.
#[derive(Debug, Error)]
pub enum SennaError {
    /// The corpus or a query-word file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An averaging operation saw zero known words.
    #[error("empty aggregate: {context}")]
    EmptyAggregate { context: String },

    /// Invalid configuration, e.g. inverted partition thresholds.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl SennaError {
    /// Create an empty-aggregate error.
    pub fn empty_aggregate(context: impl Into<String>) -> Self {
        SennaError::EmptyAggregate {
            context: context.into(),
        }
    }

    /// Create an invalid-configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        SennaError::InvalidConfig {
            message: message.into(),
        }
    }
}
