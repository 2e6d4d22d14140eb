//! Error types for the Storyreel library.
//!
//! This crate provides the foundation error types used throughout the Storyreel workspace.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storyreel_error::{StorageError, StorageErrorKind, StoryreelResult};
//!
//! fn load_project() -> StoryreelResult<String> {
//!     Err(StorageError::new(StorageErrorKind::NotFound("story.json".to_string())))?
//! }
//!
//! assert!(load_project().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generator;
mod json;
mod storage;
mod story;

pub use config::ConfigError;
pub use error::{StoryreelError, StoryreelErrorKind, StoryreelResult};
pub use generator::{GeneratorError, GeneratorErrorKind, RetryableError};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
pub use story::{StoryError, StoryErrorKind};
