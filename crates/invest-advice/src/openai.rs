//! OpenAI Chat-Completion Client
//!
//! Sends the user's prompt as a single chat message and returns the first
//! choice's content, the same shape the dashboard has always used.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{AdviceError, Result};
use crate::service::AdviceService;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4";
const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// OpenAI client configuration
#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    /// API base URL (overridable for proxies and tests)
    pub base_url: String,

    /// Bearer token
    pub api_key: String,

    /// Chat model to use
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            timeout_secs: 60,
        }
    }

    /// Read configuration from the environment. Fails when no API key is
    /// set so the caller can run without the advice feature instead of
    /// failing on first use.
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var(API_KEY_VAR).map_err(|_| AdviceError::MissingApiKey(API_KEY_VAR))?;
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        Ok(Self {
            base_url,
            api_key,
            model,
            timeout_secs: 60,
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Advice service backed by the OpenAI chat-completions API.
pub struct OpenAiClient {
    http: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    /// Fails only when the underlying HTTP client cannot be built; falling
    /// back to a default client would drop the configured timeout.
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(OpenAiConfig::from_env()?)
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl AdviceService for OpenAiClient {
    async fn advise(&self, prompt: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(AdviceError::EmptyPrompt);
        }

        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AdviceError::Service(format!(
                "upstream returned {status}: {detail}"
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| AdviceError::Service(format!("unexpected response shape: {e}")))?;

        let advice = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AdviceError::Service("response contained no choices".into()))?;

        tracing::debug!(model = %self.config.model, chars = advice.len(), "received advice");
        Ok(advice)
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/models", self.config.base_url);
        match self
            .http
            .get(&url)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::warn!("OpenAI health check failed: {}", e);
                false
            }
        }
    }

    fn name(&self) -> &str {
        "OpenAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let body = ChatRequest {
            model: "gpt-4",
            messages: vec![ChatMessage {
                role: "user",
                content: "How should I diversify?",
            }],
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "How should I diversify?");
    }

    #[test]
    fn response_parsing_takes_first_choice() {
        let json = r#"{
            "id": "chatcmpl-123",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Spread your risk."},
                 "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 12, "completion_tokens": 4, "total_tokens": 16}
        }"#;

        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Spread your risk.");
    }

    #[test]
    fn constructor_applies_configured_timeout() {
        assert!(OpenAiClient::new(OpenAiConfig::new("test-key")).is_ok());
    }

    #[tokio::test]
    async fn empty_prompt_is_rejected_before_any_request() {
        let client = OpenAiClient::new(OpenAiConfig::new("test-key")).unwrap();
        let err = client.advise("   ").await.unwrap_err();
        assert!(matches!(err, AdviceError::EmptyPrompt));
    }
}
