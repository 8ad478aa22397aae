//! OpenAI-compatible chat-completions adapter.
//!
//! Speaks the `/chat/completions` wire shape, so any endpoint that
//! implements it (OpenAI itself, a proxy, a local server) works by
//! pointing `base_url` elsewhere.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::trait_def::TextGenerator;
use super::types::GenerationRequest;

/// Configuration for the OpenAI adapter.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl OpenAiConfig {
    pub const DEFAULT_MODEL: &str = "gpt-4o";
    pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

    /// Build a config from the environment.
    ///
    /// The API key comes from `LARDER_OPENAI_API_KEY`, falling back to the
    /// conventional `OPENAI_API_KEY`. Model and base URL have defaults and
    /// their own override variables.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("LARDER_OPENAI_API_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .context("no API key found; set LARDER_OPENAI_API_KEY or OPENAI_API_KEY")?;
        let model =
            std::env::var("LARDER_OPENAI_MODEL").unwrap_or_else(|_| Self::DEFAULT_MODEL.to_owned());
        let base_url = std::env::var("LARDER_OPENAI_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_owned());
        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }

    /// Build a config from explicit values (useful for tests and CLI flags).
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
        }
    }
}

/// [`TextGenerator`] implementation backed by a chat-completions endpoint.
pub struct OpenAiGenerator {
    config: OpenAiConfig,
    client: reqwest::Client,
}

impl OpenAiGenerator {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: MessageContent,
}

/// Plain text for ordinary prompts; a parts array when an image rides along.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

// ---------------------------------------------------------------------------

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let user_content = match &request.image {
            Some(image) => MessageContent::Parts(vec![
                ContentPart::Text {
                    text: request.prompt.clone(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image.data_url(),
                    },
                },
            ]),
            None => MessageContent::Text(request.prompt.clone()),
        };

        let body = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MessageContent::Text(request.system.clone()),
                },
                ChatMessage {
                    role: "user",
                    content: user_content,
                },
            ],
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        debug!(model = %self.config.model, url = %url, "sending generation request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("generation request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            bail!("generation endpoint returned {status}: {text}");
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .context("failed to decode chat completion response")?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        match content {
            Some(text) => Ok(text),
            None => bail!("model returned no choices"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genai::types::ImageAttachment;

    #[test]
    fn text_only_request_serializes_as_plain_content() {
        let body = ChatCompletionRequest {
            model: "gpt-4o".to_string(),
            messages: vec![ChatMessage {
                role: "user",
                content: MessageContent::Text("hello".to_string()),
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn image_request_serializes_as_content_parts() {
        let image = ImageAttachment::from_base64("image/jpeg", "AAAA");
        let body = ChatCompletionRequest {
            model: "gpt-4o".to_string(),
            messages: vec![ChatMessage {
                role: "user",
                content: MessageContent::Parts(vec![
                    ContentPart::Text {
                        text: "extract".to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: image.data_url(),
                        },
                    },
                ]),
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][0]["content"][0]["type"], "text");
        assert_eq!(json["messages"][0]["content"][1]["type"], "image_url");
        assert_eq!(
            json["messages"][0]["content"][1]["image_url"]["url"],
            "data:image/jpeg;base64,AAAA"
        );
    }

    #[test]
    fn response_content_extraction() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"{\"ok\":1}"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);
        assert_eq!(content.as_deref(), Some("{\"ok\":1}"));
    }
}
