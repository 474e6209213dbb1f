use super::client::InferenceHttpClient;
use super::types::{
    ApiFailure, ApiResponse, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ImageUrl,
    MessageContent, MessagePart,
};
use crate::ai::{ChatOutcome, VisionChatService};
use crate::sketch::EncodedSketch;
use crate::{prompts, Error, Result};
use async_trait::async_trait;

const TEMPERATURE: f32 = 0.4;
const MAX_OUTPUT_TOKENS: u32 = 1200;

pub struct GitHubModelsVisionClient {
    http: InferenceHttpClient,
    model: String,
}

impl GitHubModelsVisionClient {
    pub fn new(token: String, model: String, endpoint: String) -> Self {
        Self::new_with_client(token, model, endpoint, reqwest::Client::new())
    }

    pub fn new_with_client(
        token: String,
        model: String,
        endpoint: String,
        client: reqwest::Client,
    ) -> Self {
        Self {
            http: InferenceHttpClient::new_with_client(token, endpoint, client),
            model,
        }
    }
}

#[async_trait]
impl VisionChatService for GitHubModelsVisionClient {
    async fn generate_page_code(&self, sketch: &EncodedSketch) -> Result<ChatOutcome> {
        tracing::debug!("Requesting page code for sketch ({} bytes)", sketch.size_bytes);

        // Part order is part of the contract: instruction first, image second.
        let user_message = ChatMessage {
            role: "user".to_string(),
            content: Some(MessageContent::Parts(vec![
                MessagePart {
                    part_type: "text".to_string(),
                    text: Some(prompts::SKETCH_USER.trim().to_string()),
                    image_url: None,
                },
                MessagePart {
                    part_type: "image_url".to_string(),
                    text: None,
                    image_url: Some(ImageUrl {
                        url: sketch.data_url.clone(),
                    }),
                },
            ])),
        };

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![user_message],
            temperature: TEMPERATURE,
            max_tokens: MAX_OUTPUT_TOKENS,
        };

        match self.http.chat_completion(&request).await? {
            ApiResponse::Success(response) => Ok(extract_outcome(response)),
            ApiResponse::Failure(failure) => Err(report_failure(failure)),
        }
    }
}

/// Reduce a successful response body to its renderable outcome.
fn extract_outcome(response: ChatCompletionResponse) -> ChatOutcome {
    let Some(choice) = response.choices.into_iter().next() else {
        return ChatOutcome::NoChoices;
    };

    match choice.message.content {
        Some(MessageContent::Text(text)) => ChatOutcome::Text(text),
        Some(MessageContent::Parts(parts)) => {
            let texts: Vec<String> = parts
                .into_iter()
                .filter(|part| part.part_type == "text")
                .filter_map(|part| part.text.filter(|text| !text.is_empty()))
                .collect();
            if texts.is_empty() {
                ChatOutcome::NoTextParts
            } else {
                ChatOutcome::Text(texts.join("\n"))
            }
        }
        Some(MessageContent::Other(value)) => ChatOutcome::Unexpected(value),
        None => ChatOutcome::Unexpected(serde_json::Value::Null),
    }
}

/// Log a non-success response field by field and fold it into an error.
fn report_failure(failure: ApiFailure) -> Error {
    tracing::error!("Request failed: {}", failure.status);

    match failure.error {
        Some(error) => {
            let mut summary = Vec::new();
            if let Some(code) = &error.code {
                tracing::error!("Error code: {}", code);
                summary.push(code.clone());
            }
            if let Some(message) = &error.message {
                tracing::error!("Message: {}", message);
                summary.push(message.clone());
            }
            for detail in &error.details {
                tracing::error!(" - {}", detail);
            }
            Error::Api(format!(
                "chat completion failed (status {}): {}",
                failure.status,
                summary.join(": ")
            ))
        }
        None => {
            tracing::error!("Raw body: {}", failure.raw_body);
            Error::Api(format!(
                "chat completion failed (status {}): {}",
                failure.status, failure.raw_body
            ))
        }
    }
}
