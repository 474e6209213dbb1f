//! Vision chat integration
//!
//! Provides the client that sends the encoded sketch to the GitHub Models
//! inference endpoint and reduces the response to a renderable outcome.

pub mod chat;
pub mod client;
pub mod mock;
pub mod types;

pub use chat::GitHubModelsVisionClient;
pub use mock::MockVisionClient;

use crate::sketch::EncodedSketch;
use crate::Result;
use async_trait::async_trait;

/// Outcome of one chat completion, reduced to what the console renders.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutcome {
    /// Generated text: string content, or text parts joined by newline.
    Text(String),
    /// Multipart content that carried no non-empty text parts.
    NoTextParts,
    /// The service returned an empty choices sequence.
    NoChoices,
    /// Content of a shape this client does not recognize.
    Unexpected(serde_json::Value),
}

#[async_trait]
pub trait VisionChatService: Send + Sync {
    async fn generate_page_code(&self, sketch: &EncodedSketch) -> Result<ChatOutcome>;
}
