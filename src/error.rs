//! Error Handling Module
//!
//! Defines the crate error type for the benchmark harness.
//! Uses thiserror for ergonomic error definitions. Failures are fail-fast:
//! any collaborator error aborts the run, there are no retries.

use thiserror::Error;

/// Main error type for benchmark harness operations
#[derive(Error, Debug)]
pub enum BenchError {
    /// Configuration error (invalid repeat/log_freq/batch_size, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error with the data source
    #[error("Data source error: {0}")]
    Data(String),

    /// Error produced by a model or runtime collaborator
    #[error("Inference error: {0}")]
    Inference(String),

    /// Tensor shape mismatch between collaborators
    #[error("Shape mismatch: expected {expected:?}, got {got}")]
    Shape { expected: (usize, usize), got: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience Result type for benchmark harness operations
pub type Result<T> = std::result::Result<T, BenchError>;
