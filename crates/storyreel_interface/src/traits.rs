//! Generator traits.

use crate::{AudioPromptRequest, ExtendStoryRequest, StoryboardRequest};
use async_trait::async_trait;
use storyreel_core::LatentStory;
use storyreel_error::StoryreelResult;

/// Text generation backend used to continue a story.
#[async_trait]
pub trait StoryWriter: Send + Sync {
    /// Write `nb_shots` new shots continuing the given latent story.
    async fn extend_story(&self, req: &ExtendStoryRequest) -> StoryreelResult<Vec<LatentStory>>;

    /// Suggest ambient sound prompts for the story. The first one is used.
    async fn sound_prompts(&self, req: &AudioPromptRequest) -> StoryreelResult<Vec<String>>;

    /// Suggest background music prompts for the story. The first one is used.
    async fn music_prompts(&self, req: &AudioPromptRequest) -> StoryreelResult<Vec<String>>;

    /// Provider name, for logging.
    fn provider_name(&self) -> &str;
}

/// Image generation backend used to draw storyboards.
#[async_trait]
pub trait StoryboardRenderer: Send + Sync {
    /// Render one storyboard image and return its asset URL
    /// (data URI, remote URL or local path).
    async fn render(&self, req: &StoryboardRequest) -> StoryreelResult<String>;

    /// Provider name, for logging.
    fn provider_name(&self) -> &str;
}

#[async_trait]
impl<T: StoryWriter + ?Sized> StoryWriter for std::sync::Arc<T> {
    async fn extend_story(&self, req: &ExtendStoryRequest) -> StoryreelResult<Vec<LatentStory>> {
        (**self).extend_story(req).await
    }

    async fn sound_prompts(&self, req: &AudioPromptRequest) -> StoryreelResult<Vec<String>> {
        (**self).sound_prompts(req).await
    }

    async fn music_prompts(&self, req: &AudioPromptRequest) -> StoryreelResult<Vec<String>> {
        (**self).music_prompts(req).await
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }
}

#[async_trait]
impl<T: StoryboardRenderer + ?Sized> StoryboardRenderer for std::sync::Arc<T> {
    async fn render(&self, req: &StoryboardRequest) -> StoryreelResult<String> {
        (**self).render(req).await
    }

    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }
}
