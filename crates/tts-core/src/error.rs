//! Unified error types for the TTS pipeline.
//!
//! The taxonomy distinguishes "bad request" (`InvalidInput`) from "backend
//! failure" (`Synthesis`) so callers can branch on the kind instead of
//! catching generic failures. A synthesis failure mid-sequence aborts the
//! whole request; partial audio is never returned.

/// Main error type for TTS pipeline operations.
#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    /// Invalid request input: empty text, no segments after parsing, or
    /// no audio produced. Raised before any synthesis call where possible.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Failure raised by the synthesizer backend mid-sequence.
    #[error("synthesis failed: {0}")]
    Synthesis(String),

    /// Failure acquiring or releasing a transient resource (buffer,
    /// temporary file, handle). Cleanup errors never mask the primary one.
    #[error("resource error: {0}")]
    Resource(String),

    /// Audio buffers with differing sample rates cannot be concatenated.
    #[error("sample rate mismatch: expected {expected} Hz, got {actual} Hz")]
    SampleRateMismatch { expected: u32, actual: u32 },

    /// Request exceeded its deadline.
    #[error("operation timeout after {ms}ms")]
    Timeout { ms: u64 },

    /// Request was cancelled before completion.
    #[error("request cancelled")]
    Cancelled,

    /// The synthesizer capability is not ready to serve requests.
    #[error("synthesizer unavailable: {0}")]
    Unavailable(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with TtsError.
pub type TtsResult<T> = Result<T, TtsError>;

impl TtsError {
    /// Create an invalid input error with message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a synthesis error with message.
    pub fn synthesis(msg: impl Into<String>) -> Self {
        Self::Synthesis(msg.into())
    }

    /// Create a resource error with message.
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }

    /// Create an unavailable error with message.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// True for errors the caller caused (as opposed to backend failures).
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
