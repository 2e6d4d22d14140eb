//! HTTP storyboard renderer.

use crate::{ServiceClient, StoryboardResponse};
use async_trait::async_trait;
use storyreel_core::ServicesConfig;
use storyreel_error::{GeneratorError, GeneratorErrorKind, StoryreelResult};
use storyreel_interface::{StoryboardRenderer, StoryboardRequest};
use tracing::{debug, instrument};

/// Storyboard renderer backed by the image service.
///
/// `POST {storyboard_url}/storyboard` answers `{ "asset_url": ".." }`.
#[derive(Debug, Clone)]
pub struct HttpStoryboardRenderer {
    client: ServiceClient,
}

impl HttpStoryboardRenderer {
    /// Create a renderer for the configured storyboard service.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(services: &ServicesConfig) -> StoryreelResult<Self> {
        Ok(Self::with_client(ServiceClient::new(
            services.storyboard_url(),
            services,
        )?))
    }

    /// Create a renderer around an existing client.
    pub fn with_client(client: ServiceClient) -> Self {
        Self { client }
    }

    /// The underlying service client.
    pub fn client(&self) -> &ServiceClient {
        &self.client
    }
}

#[async_trait]
impl StoryboardRenderer for HttpStoryboardRenderer {
    #[instrument(
        skip(self, req),
        fields(width = req.width(), height = req.height(), turbo = req.turbo())
    )]
    async fn render(&self, req: &StoryboardRequest) -> StoryreelResult<String> {
        let response: StoryboardResponse = self.client.post("storyboard", req).await?;
        let asset_url = response.into_asset_url();
        if asset_url.is_empty() {
            return Err(GeneratorError::new(GeneratorErrorKind::EmptyResponse(
                "storyboard service returned no asset".to_string(),
            ))
            .into());
        }
        debug!(asset_len = asset_url.len(), "Rendered storyboard");
        Ok(asset_url)
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}
