//! Request types passed to generators.

use serde::{Deserialize, Serialize};
use storyreel_core::LatentStory;

/// Ask a [`StoryWriter`](crate::StoryWriter) for more shots.
///
/// # Examples
///
/// ```
/// use storyreel_interface::ExtendStoryRequest;
///
/// let req = ExtendStoryRequest::builder()
///     .prompt("a cat explores the moon")
///     .nb_shots(4u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(*req.nb_shots(), 4);
/// assert!(req.latent_story().is_empty());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct ExtendStoryRequest {
    /// What the continuation should be about
    prompt: String,
    /// The story so far, one entry per shot
    #[builder(default)]
    latent_story: Vec<LatentStory>,
    /// How many shots to write
    #[builder(default = "4")]
    nb_shots: u32,
    /// Prefer a faster, cheaper model
    #[builder(default)]
    turbo: bool,
}

impl ExtendStoryRequest {
    /// Creates a new request builder.
    pub fn builder() -> ExtendStoryRequestBuilder {
        ExtendStoryRequestBuilder::default()
    }
}

/// Ask a [`StoryWriter`](crate::StoryWriter) for sound or music prompts.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct AudioPromptRequest {
    /// The story prompt
    prompt: String,
    /// The story to score
    #[builder(default)]
    latent_story: Vec<LatentStory>,
    /// Prefer a faster, cheaper model
    #[builder(default)]
    turbo: bool,
}

impl AudioPromptRequest {
    /// Creates a new request builder.
    pub fn builder() -> AudioPromptRequestBuilder {
        AudioPromptRequestBuilder::default()
    }
}

/// Ask a [`StoryboardRenderer`](crate::StoryboardRenderer) for one image.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct StoryboardRequest {
    /// Positive image prompt
    prompt: String,
    /// Reference image of the main entity, for identity-preserving renders
    #[builder(default)]
    identity_image: Option<String>,
    /// Image width in pixels
    #[builder(default = "1024")]
    width: u32,
    /// Image height in pixels
    #[builder(default = "576")]
    height: u32,
    /// Use the fast rendering path
    #[builder(default)]
    turbo: bool,
}

impl StoryboardRequest {
    /// Creates a new request builder.
    pub fn builder() -> StoryboardRequestBuilder {
        StoryboardRequestBuilder::default()
    }
}
