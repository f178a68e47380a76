//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::SessionSummaryError;

/// Errors emitted by question sources.
///
/// `Io` and `Parse` both mean the source is unavailable; they are kept apart
/// so a caller can report a missing file differently from a malformed one.
/// No retry policy lives here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("failed to read question data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse question data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question data contains no questions")]
    Empty,
}

/// Errors emitted by the session engine.
///
/// `Completed` and `Incomplete` signal out-of-sequence calls. They are
/// integration defects between the presentation layer and the engine, not
/// user-facing conditions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,

    #[error("session already completed")]
    Completed,

    #[error("session not yet completed")]
    Incomplete,

    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
}
