use crate::ai::types::{ApiFailure, ApiResponse, ChatCompletionRequest, ErrorBody};
use crate::{Error, Result};
use reqwest::Client;

/// Thin HTTP wrapper around the inference endpoint.
///
/// Every HTTP status is decoded into an explicit [`ApiResponse`]; only
/// transport and decode failures surface as `Err`.
pub struct InferenceHttpClient {
    client: Client,
    token: String,
    base_url: String,
}

impl InferenceHttpClient {
    pub fn new(token: String, base_url: String) -> Self {
        Self::new_with_client(token, base_url, Client::new())
    }

    /// Build on a shared reqwest client (one connection pool per process).
    pub fn new_with_client(token: String, base_url: String, client: Client) -> Self {
        Self {
            client,
            token,
            base_url,
        }
    }

    pub async fn chat_completion(&self, request: &ChatCompletionRequest) -> Result<ApiResponse> {
        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Network / transport error: {}", e);
                e
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // The service reports structured errors as {"error": {...}};
            // anything else is kept verbatim for the caller to dump.
            let error = serde_json::from_str::<ErrorBody>(&body).ok().map(|b| b.error);
            return Ok(ApiResponse::Failure(ApiFailure {
                status,
                error,
                raw_body: body,
            }));
        }

        let parsed = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse chat completion response: {}\nBody: {}", e, body);
            Error::Api(format!("Failed to parse chat completion response: {}", e))
        })?;

        Ok(ApiResponse::Success(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_client(server: &MockServer) -> InferenceHttpClient {
        InferenceHttpClient::new("test-key".to_string(), server.uri())
    }

    fn empty_request() -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![],
            temperature: 0.4,
            max_tokens: 1200,
        }
    }

    #[tokio::test]
    async fn test_success_status_decodes_choices() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{
                    "message": { "role": "assistant", "content": "ok" },
                    "finish_reason": "stop"
                }]
            })))
            .mount(&server)
            .await;

        let response = make_client(&server)
            .chat_completion(&empty_request())
            .await
            .unwrap();

        match response {
            ApiResponse::Success(body) => assert_eq!(body.choices.len(), 1),
            ApiResponse::Failure(failure) => panic!("Unexpected failure: {:?}", failure),
        }
    }

    #[tokio::test]
    async fn test_error_status_decodes_structured_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": { "code": "Unauthorized", "message": "bad token" }
            })))
            .mount(&server)
            .await;

        let response = make_client(&server)
            .chat_completion(&empty_request())
            .await
            .unwrap();

        match response {
            ApiResponse::Failure(failure) => {
                assert_eq!(failure.status.as_u16(), 401);
                let error = failure.error.unwrap();
                assert_eq!(error.code.as_deref(), Some("Unauthorized"));
                assert_eq!(error.message.as_deref(), Some("bad token"));
            }
            ApiResponse::Success(_) => panic!("Expected failure"),
        }
    }

    #[tokio::test]
    async fn test_error_status_keeps_unstructured_body_raw() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream offline"))
            .mount(&server)
            .await;

        let response = make_client(&server)
            .chat_completion(&empty_request())
            .await
            .unwrap();

        match response {
            ApiResponse::Failure(failure) => {
                assert_eq!(failure.status.as_u16(), 503);
                assert!(failure.error.is_none());
                assert_eq!(failure.raw_body, "upstream offline");
            }
            ApiResponse::Success(_) => panic!("Expected failure"),
        }
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .chat_completion(&empty_request())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(_)));
    }
}
