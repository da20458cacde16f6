//! Gemini adapter — Google Generative Language `generateContent` REST API.
//!
//! Unlike OpenRouter, this vendor accepts a declared output schema, so the
//! adapter pins the reply to a JSON object with an integer `cardId` and a
//! string `interpretation` in addition to the prompt contract.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{GeneratorError, TextGenerator};
use async_trait::async_trait;

/// Configuration for the Gemini endpoint, injected at construction.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API key (GEMINI_API_KEY), sent as the `key` query parameter.
    pub api_key: String,
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".into()
}
fn default_model() -> String {
    "gemini-1.5-flash".into()
}
fn default_timeout_secs() -> u64 {
    30
}

impl GeminiConfig {
    /// Build a config with defaults around the given key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY is not set")?;
        let mut config = Self::with_api_key(api_key);
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.model = model;
        }
        Ok(config)
    }
}

/// `generateContent` request body (only the fields we send).
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

/// Declared output schema: the two-field reading contract.
fn reading_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "cardId": {
                "type": "INTEGER",
                "description": "Major Arcana card id, an integer from 0 to 21"
            },
            "interpretation": {
                "type": "STRING",
                "description": "Psychological interpretation in Russian, at most ~200 words"
            }
        },
        "required": ["cardId", "interpretation"]
    })
}

/// `generateContent` response (only the fields we need).
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build reqwest client");
        Self { client, config }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn complete(
        &self,
        system_context: &str,
        user_text: &str,
    ) -> Result<String, GeneratorError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let body = GenerateRequest {
            system_instruction: Content {
                parts: vec![Part {
                    text: system_context,
                }],
            },
            contents: vec![Content {
                parts: vec![Part { text: user_text }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: reading_schema(),
            },
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
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

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::Transport(format!("response envelope decode: {e}")))?;

        generated
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().find_map(|p| p.text))
            .filter(|text| !text.trim().is_empty())
            .ok_or(GeneratorError::EmptyPayload)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}
