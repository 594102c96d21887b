//! OpenAI vision extractor using the Chat Completions API.
//!
//! Sends the instruction and the image (as a data URL) in one user message,
//! then reads the first choice's text as a JSON array of addresses.

use super::provider::{parse_address_list, AddressExtractor, ImageInput, EXTRACTION_PROMPT};
use crate::config::{resolve_env_var, VisionConfig};
use crate::error::{ConfigError, ExtractionError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Address extractor backed by an OpenAI vision model.
pub struct OpenAiExtractor {
    api_key: String,
    model: String,
    max_tokens: u32,
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl OpenAiExtractor {
    pub fn new(api_key: &str, model: &str) -> Self {
        let defaults = VisionConfig::default();
        Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            max_tokens: defaults.max_tokens,
            endpoint: defaults.endpoint,
            timeout: Duration::from_millis(defaults.timeout_ms),
            client: reqwest::Client::new(),
        }
    }

    /// Create from the `[vision]` config section, resolving the API key.
    pub fn from_config(config: &VisionConfig) -> Result<Self, ConfigError> {
        let api_key = resolve_env_var(&config.api_key).ok_or_else(|| {
            ConfigError::ValidationError(
                "OpenAI API key not set. Set OPENAI_API_KEY env var.".to_string(),
            )
        })?;

        Ok(Self {
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            endpoint: config.endpoint.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
            client: reqwest::Client::new(),
        })
    }

    /// Point the extractor at a different chat-completions endpoint.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }
}

// --- Request types ---

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: Vec<ChatContent>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum ChatContent {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

// --- Response types ---

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl AddressExtractor for OpenAiExtractor {
    fn name(&self) -> &str {
        "openai"
    }

    async fn extract(&self, image: &ImageInput) -> Result<Vec<String>, ExtractionError> {
        let start = Instant::now();

        let body = ChatRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: vec![
                    ChatContent::Text {
                        text: EXTRACTION_PROMPT.to_string(),
                    },
                    ChatContent::ImageUrl {
                        image_url: ImageUrl {
                            url: image.data_url(),
                        },
                    },
                ],
            }],
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .timeout(self.timeout())
            .send()
            .await
            .map_err(|e| ExtractionError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ExtractionError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let chat_resp: ChatResponse = resp
            .json()
            .await
            .map_err(|e| ExtractionError::Decode(e.to_string()))?;

        let content = chat_resp
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(ExtractionError::EmptyResponse)?;

        let addresses = parse_address_list(&content)?;

        tracing::debug!(
            model = %self.model,
            count = addresses.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Extracted addresses from image"
        );

        Ok(addresses)
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion(content: &str) -> Value {
        json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        })
    }

    fn extractor(server: &MockServer) -> OpenAiExtractor {
        OpenAiExtractor::new("test-key", "gpt-4o")
            .with_endpoint(&format!("{}/v1/chat/completions", server.uri()))
    }

    #[tokio::test]
    async fn test_extract_parses_address_array() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion(
                r#"["4600 Silver Hill Rd, Washington, DC 20233", "1 Main St, Springfield, IL 62701"]"#,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let addresses = extractor(&server)
            .extract(&ImageInput::from_base64("AAAA"))
            .await
            .unwrap();

        assert_eq!(
            addresses,
            vec![
                "4600 Silver Hill Rd, Washington, DC 20233",
                "1 Main St, Springfield, IL 62701"
            ]
        );
    }

    #[tokio::test]
    async fn test_extract_sends_prompt_then_image() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("[]")))
            .mount(&server)
            .await;

        let addresses = extractor(&server)
            .extract(&ImageInput::from_base64("AAAA"))
            .await
            .unwrap();
        assert!(addresses.is_empty());

        let requests = server.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["max_tokens"], 1000);
        let content = &body["messages"][0]["content"];
        assert_eq!(content[0]["type"], "text");
        assert_eq!(content[0]["text"], EXTRACTION_PROMPT);
        assert_eq!(content[1]["type"], "image_url");
        assert_eq!(content[1]["image_url"]["url"], "data:image/jpeg;base64,AAAA");
    }

    #[tokio::test]
    async fn test_data_url_and_bare_payload_send_same_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("[]")))
            .expect(2)
            .mount(&server)
            .await;

        let extractor = extractor(&server);
        extractor
            .extract(&ImageInput::from_base64("data:image/png;base64,AAAA"))
            .await
            .unwrap();
        extractor
            .extract(&ImageInput::from_base64("AAAA"))
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let first: Value = serde_json::from_slice(&requests[0].body).unwrap();
        let second: Value = serde_json::from_slice(&requests[1].body).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_http_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let err = extractor(&server)
            .extract(&ImageInput::from_base64("AAAA"))
            .await
            .unwrap_err();

        match err {
            ExtractionError::Status { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let err = extractor(&server)
            .extract(&ImageInput::from_base64("AAAA"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_non_json_content_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion("I could not find any addresses.")),
            )
            .mount(&server)
            .await;

        let err = extractor(&server)
            .extract(&ImageInput::from_base64("AAAA"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedOutput(_)));
    }

    #[tokio::test]
    async fn test_undecodable_envelope_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = extractor(&server)
            .extract(&ImageInput::from_base64("AAAA"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Decode(_)));
    }

    #[tokio::test]
    async fn test_slow_response_times_out_as_request_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion("[]"))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let mut extractor = extractor(&server);
        extractor.timeout = Duration::from_millis(50);

        let err = extractor
            .extract(&ImageInput::from_base64("AAAA"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Request(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_request_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let extractor = OpenAiExtractor::new("test-key", "gpt-4o")
            .with_endpoint(&format!("http://127.0.0.1:{port}/v1/chat/completions"));

        let err = extractor
            .extract(&ImageInput::from_base64("AAAA"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Request(_)));
    }

    #[test]
    fn test_from_config_requires_api_key() {
        let config = VisionConfig {
            api_key: "${DEFINITELY_NOT_SET_XYZ_123}".to_string(),
            ..VisionConfig::default()
        };
        let err = OpenAiExtractor::from_config(&config).err().unwrap();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_from_config_uses_section_values() {
        let config = VisionConfig {
            api_key: "literal-key".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout_ms: 5_000,
            ..VisionConfig::default()
        };
        let extractor = OpenAiExtractor::from_config(&config).unwrap();
        assert_eq!(extractor.name(), "openai");
        assert_eq!(extractor.model, "gpt-4o-mini");
        assert_eq!(extractor.timeout(), Duration::from_secs(5));
    }
}
