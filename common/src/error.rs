//! Error types for loading targets and probing them.
//!
//! Only [`InputError`] is fatal to a run. A [`ProbeError`] is always folded into
//! the outcome of the address it belongs to and never aborts other probes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the address list. Any of these aborts the run
/// before a single probe is dispatched.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("file {} does not exist", path.display())]
    FileNotFound { path: PathBuf },

    #[error("file {} is empty or contains no valid addresses", path.display())]
    EmptyInput { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single probe produced no status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The host could not be reached or did not answer in time.
    #[error(transparent)]
    Failure(#[from] FailureReason),

    /// Something went wrong retrieving the result itself, e.g. a probe task
    /// that panicked.
    #[error("{0}")]
    Unexpected(String),
}

/// Transport level reasons. They are rendered identically to the user and only
/// show up in debug logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    #[error("timed out")]
    Timeout,

    #[error("connection failed")]
    Connect,

    #[error("request failed: {0}")]
    Request(String),
}

impl ProbeError {
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Self::Unexpected(_))
    }
}
