//! Core data types for the Storyreel library.
//!
//! A story is a [`Project`]: metadata, an entity list, and a flat list of
//! time-stamped [`Segment`]s spread over numbered tracks. Each segment has a
//! [`SegmentCategory`] (video, storyboard, dialogue, camera, ...), a prompt
//! describing what should be generated, and an asset slot filled in once a
//! generator has produced it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod config;
mod entity;
mod filter;
mod mode;
mod project;
mod segment;
mod story;

pub use category::{AssetSourceType, OutputType, SegmentCategory, SegmentStatus, asset_source_type};
pub use config::{
    ServicesConfig, ServicesConfigBuilder, StoryConfig, StoryConfigBuilder, StoryboardConfig,
    StoryboardConfigBuilder, StoryreelConfig,
};
pub use entity::{Entity, EntityBuilder, EntityIndex};
pub use filter::{FilteringMode, filter_segments};
pub use mode::CompletionMode;
pub use project::{Project, ProjectMeta, ProjectMetaBuilder};
pub use segment::{Segment, SegmentBuilder, SegmentBuilderError};
pub use story::{LatentStory, latent_story};
