//! Generation service errors and retry classification.

/// Generation service error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeneratorErrorKind {
    /// Failed to build the HTTP client
    #[display("Failed to create generator client: {}", _0)]
    ClientCreation(String),
    /// The request never produced a response (DNS, connect, timeout)
    #[display("Request to {} failed: {}", endpoint, message)]
    Transport {
        /// Endpoint that was called
        endpoint: String,
        /// Error message
        message: String,
    },
    /// The service answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The response body did not match the expected shape
    #[display("Invalid response: {}", _0)]
    InvalidResponse(String),
    /// The service answered successfully but with nothing usable
    #[display("Empty response: {}", _0)]
    EmptyResponse(String),
    /// A generator reported a failure of its own
    #[display("Generation failed: {}", _0)]
    Failed(String),
}

impl GeneratorErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            GeneratorErrorKind::HttpStatus { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            GeneratorErrorKind::Transport { .. } => true,
            _ => false,
        }
    }

    /// Get retry strategy parameters for this error type.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    pub fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self {
            GeneratorErrorKind::HttpStatus { status_code, .. } => match *status_code {
                429 => (5000, 3, 40),
                503 => (2000, 5, 60),
                500 | 502 | 504 => (1000, 3, 8),
                408 => (2000, 4, 30),
                _ => (2000, 5, 60),
            },
            GeneratorErrorKind::Transport { .. } => (1000, 3, 10),
            _ => (2000, 5, 60),
        }
    }
}

/// Generator error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyreel_error::{GeneratorError, GeneratorErrorKind, RetryableError};
///
/// let err = GeneratorError::new(GeneratorErrorKind::HttpStatus {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
///
/// assert!(err.is_retryable());
/// assert_eq!(err.retry_strategy_params(), (2000, 5, 60));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generator Error: {} at line {} in {}", kind, line, file)]
pub struct GeneratorError {
    /// The kind of error that occurred
    pub kind: GeneratorErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeneratorError {
    /// Create a new GeneratorError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeneratorErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that support retry logic.
///
/// Transient errors like 503, 429 or network timeouts return true from
/// [`is_retryable`](RetryableError::is_retryable). Permanent errors like 401
/// or 400 return false.
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;

    /// Get retry strategy parameters for this error.
    ///
    /// Returns `(initial_backoff_ms, max_retries, max_delay_secs)`.
    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        (2000, 5, 60)
    }
}

impl RetryableError for GeneratorError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        self.kind.retry_strategy_params()
    }
}
