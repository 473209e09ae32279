//! Pipeline error types
//!
//! Every error is fatal to the run it occurs in. Errors raised while
//! populating carry the number of entries processed before the failure.

use thiserror::Error;

use crate::pipeline::PipelineState;

/// Errors raised while sorting a value stream
#[derive(Debug, Error)]
pub enum SortError {
    /// Line is not a valid non-negative integer literal
    #[error("line {line}: failed to parse {text:?}: {kind}")]
    Parse {
        line: usize,
        text: String,
        kind: vsort_core::Error,
    },

    /// Value is outside the configured universe
    #[error("value {value} is outside the configured range [0, {capacity})")]
    Range { value: usize, capacity: usize },

    /// Value appeared earlier in the input
    #[error("value {value} appears more than once")]
    Duplicate { value: usize },

    /// Underlying stream read or write failure
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Pipeline stage called out of order
    #[error("cannot {action} while pipeline is {state:?}")]
    InvalidState {
        action: &'static str,
        state: PipelineState,
    },
}

impl SortError {
    /// Process exit code a command-line driver reports for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            SortError::Parse { .. } => 2,
            SortError::Range { .. } => 3,
            SortError::Duplicate { .. } => 4,
            SortError::Io(_) => 5,
            SortError::InvalidState { .. } => 6,
        }
    }
}

/// Failure while populating, with the count of entries accepted so far
#[derive(Debug, Error)]
#[error("aborted after {processed} entries: {error}")]
pub struct PopulateError {
    /// Entries successfully recorded before the failure
    pub processed: usize,
    /// What went wrong
    #[source]
    pub error: SortError,
}

/// Failure of a whole populate-then-emit run
#[derive(Debug, Error)]
#[error("run failed after {processed} entries: {error}")]
pub struct RunError {
    /// Entries successfully recorded before the failure
    pub processed: usize,
    /// What went wrong
    #[source]
    pub error: SortError,
}

impl From<PopulateError> for RunError {
    fn from(e: PopulateError) -> Self {
        Self {
            processed: e.processed,
            error: e.error,
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, SortError>;
