//! Error types for the paper pipeline.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Every layer fails fast; the pipeline converts component
//! errors into [`PipelineError`] without rewording them.

use std::path::PathBuf;

/// Errors from a paper source adapter.
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    /// Wrong query-parameter variant handed to an adapter. This is a
    /// programming error in the calling code, raised before any I/O.
    #[error("{adapter} adapter requires {expected} query parameters")]
    InvalidParameterType {
        /// Adapter that rejected the parameters
        adapter: &'static str,
        /// Parameter variant the adapter understands
        expected: &'static str,
    },

    /// Local source data is missing (e.g. no anthology XML for the
    /// requested year/conference).
    #[error("source data not found: {}", .path.display())]
    NotFound {
        /// Path that could not be read
        path: PathBuf,
    },

    /// Local source data exists but could not be parsed.
    #[error("failed to parse source data: {message}")]
    Parse {
        /// Parser diagnostic
        message: String,
    },

    /// HTTP transport error (connection, DNS, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote source answered with a non-success status.
    #[error("fetch failed ({status}): {message}")]
    Fetch {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Remote source rejected the configured credentials.
    #[error("authentication rejected: {message}")]
    Authentication {
        /// Rejection detail
        message: String,
    },
}

impl SourceError {
    /// Create a parameter-mismatch error.
    #[must_use]
    pub const fn invalid_params(adapter: &'static str, expected: &'static str) -> Self {
        Self::InvalidParameterType { adapter, expected }
    }

    /// Create a fetch error from a status code and message.
    #[must_use]
    pub fn fetch(status: u16, message: impl Into<String>) -> Self {
        Self::Fetch { status, message: message.into() }
    }

    /// Create an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication { message: message.into() }
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse { message: message.into() }
    }
}

/// Errors from the language-model interface.
#[derive(thiserror::Error, Debug)]
pub enum LlmError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Completion endpoint answered with a non-success status.
    #[error("completion endpoint returned {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// The structured completion payload did not match the expected shape.
    #[error("malformed completion payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The completion contained no choices.
    #[error("completion contained no choices")]
    EmptyCompletion,
}

/// Errors from the filter engine.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// Unknown filtering mode string.
    #[error("unknown filtering mode: {0}")]
    InvalidMode(String),

    /// A chunk-level model call failed; the whole filter call fails with it.
    /// No partial result is kept and no retry is attempted here.
    #[error("LLM filtering failed: {0}")]
    Llm(#[from] LlmError),
}

/// Errors from the notification sink.
#[derive(thiserror::Error, Debug)]
pub enum NotifyError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Chat endpoint answered with a non-success status.
    #[error("notification rejected ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// The acknowledgment lacked the timestamp used to thread replies.
    #[error("notification acknowledgment missing 'ts' field")]
    MissingAck,
}

/// Error surfaced by a pipeline run. Component errors pass through
/// untouched; no stage recovers, retries, or salvages partial results.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// Fetch stage failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Filter stage failed.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Notify stage failed.
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Result type alias for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type alias for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;
