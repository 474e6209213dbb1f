//! Process-lifetime configuration
//!
//! Everything the single generation pass needs is collected here once and
//! passed in explicitly, so tests can inject values instead of reading the
//! process environment.

use std::path::PathBuf;

/// Multimodal-capable model served by the inference endpoint.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub const DEFAULT_ENDPOINT: &str = "https://models.inference.ai.azure.com";

/// Sketch file resolved relative to the working directory.
pub const DEFAULT_IMAGE_PATH: &str = "contoso_layout_sketch.jpg";

/// Declared MIME type of the sketch; the file format is known up front and
/// never sniffed.
pub const IMAGE_MIME: &str = "image/jpeg";

/// Service-side safety ceiling on the encoded image.
pub const MAX_IMAGE_BYTES: u64 = 15 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub model: String,
    pub endpoint: String,
    pub image_path: PathBuf,
    pub image_mime: String,
    pub max_image_bytes: u64,
}

impl Config {
    /// Read configuration from the environment (and `.env` when present).
    ///
    /// `GITHUB_TOKEN` must be a PAT with model inference access; it is the
    /// only required variable.
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            github_token: std::env::var("GITHUB_TOKEN")
                .map_err(|_| crate::Error::Config("GITHUB_TOKEN not set".to_string()))?,
            model: std::env::var("MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            endpoint: std::env::var("MODELS_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            image_path: PathBuf::from(DEFAULT_IMAGE_PATH),
            image_mime: IMAGE_MIME.to_string(),
            max_image_bytes: MAX_IMAGE_BYTES,
        })
    }
}
