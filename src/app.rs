//! Application orchestration for the single generation pass.

use crate::ai::{ChatOutcome, GitHubModelsVisionClient, VisionChatService};
use crate::models::Config;
use crate::sketch;
use crate::Result;
use std::path::PathBuf;
use tracing::info;

/// Runs the linear sequence: validate the sketch, encode it, make the one
/// chat call, and hand back the outcome for rendering.
pub struct App {
    vision: Box<dyn VisionChatService>,
    config: Config,
}

impl App {
    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for tests that need to inject mocks.
    pub fn with_services(vision: Box<dyn VisionChatService>, config: Config) -> Self {
        Self { vision, config }
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;

        let vision = Box::new(GitHubModelsVisionClient::new_with_client(
            config.github_token.clone(),
            config.model.clone(),
            config.endpoint.clone(),
            reqwest::Client::new(),
        ));

        Ok(Self::with_services(vision, config))
    }

    /// Generate page code for the configured sketch (or `image_override`).
    pub async fn run(&self, image_override: Option<PathBuf>) -> Result<ChatOutcome> {
        let path = image_override.unwrap_or_else(|| self.config.image_path.clone());
        info!("Encoding sketch at {}", path.display());

        let encoded = sketch::load_sketch(&path, &self.config.image_mime, self.config.max_image_bytes)?;
        info!("Encoded sketch ({} bytes)", encoded.size_bytes);

        info!("Requesting page code (model: {})", self.config.model);
        self.vision.generate_page_code(&encoded).await
    }
}
