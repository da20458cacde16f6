//! OpenRouter adapter — OpenAI-compatible `chat/completions`.
//!
//! The free Llama tier has no structured-output support, so this adapter
//! relies entirely on the strict prompt contract carried by the system
//! context.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::{GeneratorError, TextGenerator};
use async_trait::async_trait;

/// Configuration for the OpenRouter endpoint, injected at construction.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterConfig {
    /// Bearer token (OPENROUTER_API_KEY).
    pub api_key: String,
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Referer header OpenRouter uses for app attribution.
    #[serde(default = "default_referer")]
    pub referer: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".into()
}
fn default_model() -> String {
    "meta-llama/llama-3-8b-instruct:free".into()
}
fn default_referer() -> String {
    "https://mirmag.app".into()
}
fn default_timeout_secs() -> u64 {
    30
}

impl OpenRouterConfig {
    /// Build a config with defaults around the given key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            model: default_model(),
            referer: default_referer(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key =
            std::env::var("OPENROUTER_API_KEY").context("OPENROUTER_API_KEY is not set")?;
        let mut config = Self::with_api_key(api_key);
        if let Ok(model) = std::env::var("OPENROUTER_MODEL") {
            config.model = model;
        }
        Ok(config)
    }
}

/// Chat completion request body (only the fields we send).
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat completion response (only the fields we need).
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Client for the OpenRouter chat-completions endpoint.
pub struct OpenRouterClient {
    client: reqwest::Client,
    config: OpenRouterConfig,
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build reqwest client");
        Self { client, config }
    }
}

#[async_trait]
impl TextGenerator for OpenRouterClient {
    async fn complete(
        &self,
        system_context: &str,
        user_text: &str,
    ) -> Result<String, GeneratorError> {
        let url = format!("{}/chat/completions", self.config.base_url);

        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_context,
                },
                ChatMessage {
                    role: "user",
                    content: user_text,
                },
            ],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header("HTTP-Referer", &self.config.referer)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeneratorError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::Transport(format!("response envelope decode: {e}")))?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(GeneratorError::EmptyPayload)
    }

    fn provider_name(&self) -> &str {
        "openrouter"
    }
}
