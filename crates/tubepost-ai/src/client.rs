//! Chat-completions HTTP client.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AiError, AiResult};

/// Configuration for the completion client.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// API key sent as a bearer token
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling cutoff
    pub top_p: f32,
    /// Output budget for standard generation
    pub standard_max_tokens: u32,
    /// Output budget for extended generation
    pub extended_max_tokens: u32,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.studio.nebius.ai/v1".to_string(),
            api_key: String::new(),
            model: "meta-llama/Meta-Llama-3.1-70B-Instruct-fast".to_string(),
            temperature: 0.7,
            top_p: 0.9,
            standard_max_tokens: 6000,
            extended_max_tokens: 8000,
            timeout: Duration::from_secs(120),
        }
    }
}

impl AiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("AI_API_BASE").unwrap_or(defaults.base_url),
            api_key: std::env::var("NEBIUS_API_KEY").unwrap_or_default(),
            model: std::env::var("AI_MODEL").unwrap_or(defaults.model),
            temperature: defaults.temperature,
            top_p: defaults.top_p,
            standard_max_tokens: defaults.standard_max_tokens,
            extended_max_tokens: defaults.extended_max_tokens,
            timeout: Duration::from_secs(
                std::env::var("AI_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(120),
            ),
        }
    }
}

/// Chat-completions request.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Chat-completions response, reduced to the consumed fields.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat-completions endpoint.
pub struct AiClient {
    http: Client,
    pub(crate) config: AiConfig,
}

impl AiClient {
    /// Create a new completion client.
    pub fn new(config: AiConfig) -> AiResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AiError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> AiResult<Self> {
        Self::new(AiConfig::from_env())
    }

    /// Run one completion and return its text, JSON output mode requested.
    pub(crate) async fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
    ) -> AiResult<String> {
        let url = format!("{}/chat/completions", self.config.base_url);

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            max_tokens,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        debug!(model = %self.config.model, max_tokens, "Requesting completion");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::RequestFailed { status, body });
        }

        let completion: ChatResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(AiError::EmptyCompletion)?;

        Ok(strip_code_fences(&content).to_string())
    }
}

/// Drop a markdown code fence wrapper if the model added one anyway.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix("```json").unwrap_or(text);
    let text = text.strip_prefix("```").unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}
