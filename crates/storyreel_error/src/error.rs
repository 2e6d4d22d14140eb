//! Top-level error wrapper types.

use crate::{ConfigError, GeneratorError, JsonError, StorageError, StoryError};

/// Every error condition the Storyreel crates can surface.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryreelError, JsonError};
///
/// let json_err = JsonError::new("expected value at line 1");
/// let err: StoryreelError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryreelErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Project file storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Story orchestration error
    #[from(StoryError)]
    Story(StoryError),
    /// Generation service error
    #[from(GeneratorError)]
    Generator(GeneratorError),
}

/// Storyreel error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryreelResult, ConfigError};
///
/// fn might_fail() -> StoryreelResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyreel Error: {}", _0)]
pub struct StoryreelError(Box<StoryreelErrorKind>);

impl StoryreelError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryreelErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryreelErrorKind {
        &self.0
    }
}

impl<T> From<T> for StoryreelError
where
    T: Into<StoryreelErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storyreel operations.
pub type StoryreelResult<T> = std::result::Result<T, StoryreelError>;
