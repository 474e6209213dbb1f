//! Request/response payloads for the chat-completions endpoint.

use serde::{Deserialize, Serialize};

/// Request body for chat completions.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Message content union used on both sides of the wire.
///
/// Variant order matters for `#[serde(untagged)]` decoding; `Other` must stay
/// last so unrecognized shapes are captured instead of failing the decode.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<MessagePart>),
    Other(serde_json::Value),
}

/// One content segment in multipart message input.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessagePart {
    #[serde(rename = "type")]
    pub part_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<ImageUrl>,
}

/// Image URL wrapper for message payloads.
#[derive(Debug, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Chat message object.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<MessageContent>,
}

/// Top-level chat completion response.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

/// Single choice item returned by chat completions.
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

/// Body of a non-success response when the service reports a structured
/// error object.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub details: Vec<serde_json::Value>,
}

/// Outcome of one HTTP exchange, decoded explicitly by status.
///
/// Transport failures never reach this type; they surface as `Err` from the
/// client instead.
#[derive(Debug)]
pub enum ApiResponse {
    Success(ChatCompletionResponse),
    Failure(ApiFailure),
}

/// Non-success response with whatever error structure the body carried.
#[derive(Debug)]
pub struct ApiFailure {
    pub status: reqwest::StatusCode,
    pub error: Option<ApiError>,
    pub raw_body: String,
}
