//! Trait definitions for the generation services Storyreel calls.
//!
//! Story completion only needs two collaborators: something that writes text
//! (new shots, sound and music prompts) and something that renders storyboard
//! images. Both are traits so that any backend, or a test double, can be
//! plugged in.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{StoryWriter, StoryboardRenderer};
pub use types::{
    AudioPromptRequest, AudioPromptRequestBuilder, ExtendStoryRequest, ExtendStoryRequestBuilder,
    StoryboardRequest, StoryboardRequestBuilder,
};
