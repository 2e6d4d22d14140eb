//! Wire types returned by the generation services.

use serde::{Deserialize, Serialize};
use storyreel_core::LatentStory;

/// Response of `POST /story/extend`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryResponse {
    /// The new shots, in story order
    #[serde(default)]
    shots: Vec<LatentStory>,
}

impl StoryResponse {
    /// Consume the response, returning its shots.
    pub fn into_shots(self) -> Vec<LatentStory> {
        self.shots
    }
}

/// Response of `POST /story/sounds` and `POST /story/music`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct PromptsResponse {
    /// Suggested prompts, best first
    #[serde(default)]
    prompts: Vec<String>,
}

impl PromptsResponse {
    /// Consume the response, returning its prompts.
    pub fn into_prompts(self) -> Vec<String> {
        self.prompts
    }
}

/// Response of `POST /storyboard`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryboardResponse {
    /// Data URI, remote URL or path of the rendered image
    #[serde(default)]
    asset_url: String,
}

impl StoryboardResponse {
    /// Consume the response, returning the asset URL.
    pub fn into_asset_url(self) -> String {
        self.asset_url
    }
}
