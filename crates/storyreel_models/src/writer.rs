//! HTTP story writer.

use crate::{PromptsResponse, ServiceClient, StoryResponse};
use async_trait::async_trait;
use storyreel_core::{LatentStory, ServicesConfig};
use storyreel_error::StoryreelResult;
use storyreel_interface::{AudioPromptRequest, ExtendStoryRequest, StoryWriter};
use tracing::{debug, instrument};

/// Story writer backed by the story service.
///
/// Endpoints, relative to `services.story_url`:
/// - `POST /story/extend` -> `{ "shots": [{ "comment", "image", "voice" }] }`
/// - `POST /story/sounds` -> `{ "prompts": [..] }`
/// - `POST /story/music` -> `{ "prompts": [..] }`
#[derive(Debug, Clone)]
pub struct HttpStoryWriter {
    client: ServiceClient,
}

impl HttpStoryWriter {
    /// Create a writer for the configured story service.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(services: &ServicesConfig) -> StoryreelResult<Self> {
        Ok(Self::with_client(ServiceClient::new(
            services.story_url(),
            services,
        )?))
    }

    /// Create a writer around an existing client.
    pub fn with_client(client: ServiceClient) -> Self {
        Self { client }
    }

    /// The underlying service client.
    pub fn client(&self) -> &ServiceClient {
        &self.client
    }
}

#[async_trait]
impl StoryWriter for HttpStoryWriter {
    #[instrument(skip(self, req), fields(nb_shots = req.nb_shots(), turbo = req.turbo()))]
    async fn extend_story(&self, req: &ExtendStoryRequest) -> StoryreelResult<Vec<LatentStory>> {
        let response: StoryResponse = self.client.post("story/extend", req).await?;
        debug!(shots = response.shots().len(), "Story service answered");
        Ok(response.into_shots())
    }

    #[instrument(skip(self, req))]
    async fn sound_prompts(&self, req: &AudioPromptRequest) -> StoryreelResult<Vec<String>> {
        let response: PromptsResponse = self.client.post("story/sounds", req).await?;
        Ok(response.into_prompts())
    }

    #[instrument(skip(self, req))]
    async fn music_prompts(&self, req: &AudioPromptRequest) -> StoryreelResult<Vec<String>> {
        let response: PromptsResponse = self.client.post("story/music", req).await?;
        Ok(response.into_prompts())
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}
