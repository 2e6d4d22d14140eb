//! Story orchestration error types.

/// Specific error conditions for story extension and storyboard completion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoryErrorKind {
    /// The referenced shot does not exist in the project
    #[display("Shot segment not found: {}", _0)]
    ShotNotFound(String),
    /// The referenced segment is not a camera shot
    #[display("Segment {} is not a camera shot", _0)]
    NotAShot(String),
    /// The story writer returned no shots
    #[display("Story writer returned no shots")]
    NoShots,
    /// A segment or generator request failed to build
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Error type for story operations.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::NoShots);
/// assert!(format!("{}", err).contains("no shots"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    /// The specific error condition
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new StoryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
