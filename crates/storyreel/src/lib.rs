//! Storyreel - story timeline extension and completion
//!
//! Storyreel takes a multi-track story timeline (video, storyboard, caption,
//! dialogue, camera, sound and music segments) and fills it in with the help
//! of generative services:
//!
//! - **Story extension**: a [`StoryWriter`] continues the story with new shots,
//!   laid out after the end of the timeline with matching sound and music
//! - **Storyboard completion**: every shot gets a storyboard segment, a prompt
//!   and an image from a [`StoryboardRenderer`]
//! - **Completion modes**: results come back as the whole project
//!   ([`CompletionMode::Full`]) or as only the new segments
//!   ([`CompletionMode::Partial`])
//!
//! # Quick Start
//!
//! ```no_run
//! use storyreel::{CompletionMode, ExtendOptions, HttpStoryWriter, Project, StoryreelConfig, extend_project};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoryreelConfig::load()?;
//!     let writer = HttpStoryWriter::new(&config.services)?;
//!     let project = Project::from_file("story.json")?;
//!
//!     let options = ExtendOptions::default().with_prompt("the crew finds a cave");
//!     let (extended, report) =
//!         extend_project(writer, config.story, project, CompletionMode::Full, &options).await?;
//!
//!     println!("added {} shots", report.shots());
//!     extended.to_file("story.json")?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `storyreel_error` - Error types
//! - `storyreel_core` - Timeline model, filtering and configuration
//! - `storyreel_interface` - Generator traits
//! - `storyreel_story` - Story extension and storyboard completion
//! - `storyreel_models` - HTTP generator clients
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod pipeline;
mod summary;
mod telemetry;

pub use pipeline::{complete_storyboards, extend_project};
pub use summary::ProjectSummary;
pub use telemetry::init_tracing;

pub use storyreel_core::{
    AssetSourceType, CompletionMode, Entity, EntityBuilder, EntityIndex, FilteringMode,
    LatentStory, OutputType, Project, ProjectMeta, ProjectMetaBuilder, Segment, SegmentBuilder,
    SegmentCategory, SegmentStatus, ServicesConfig, StoryConfig, StoryboardConfig,
    StoryreelConfig, asset_source_type, filter_segments, latent_story,
};
pub use storyreel_error::{
    ConfigError, GeneratorError, GeneratorErrorKind, JsonError, RetryableError, StorageError,
    StorageErrorKind, StoryError, StoryErrorKind, StoryreelError, StoryreelErrorKind,
    StoryreelResult,
};
pub use storyreel_interface::{
    AudioPromptRequest, ExtendStoryRequest, StoryWriter, StoryboardRenderer, StoryboardRequest,
};
pub use storyreel_models::{HttpStoryWriter, HttpStoryboardRenderer, ServiceClient};
pub use storyreel_story::{
    CompletionSession, ExtendOptions, ExtendReport, ShotReport, StoryExtender,
    StoryboardCompleter, StoryboardReport, check_captions, positive_prompt, video_prompt,
};
