//! DeepSeek chat-completions adapter for the [`LlmGateway`] port.
//!
//! Speaks the OpenAI-compatible `/chat/completions` shape: system turn plus
//! user turn, bearer auth, low temperature for deterministic-leaning output,
//! bounded `max_tokens`. One request per call, no retry; the bounded timeout
//! on the shared client is the only resource control.

use crate::config::ProviderConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use surveyforge_application::ports::llm_gateway::{GatewayError, LlmGateway};
use surveyforge_domain::Model;
use tracing::debug;

/// Sampling temperature; low to reduce output variance.
const TEMPERATURE: f64 = 0.1;

/// Output token ceiling for a parsed survey.
const MAX_TOKENS: u32 = 4000;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Pull the first choice's text out of a reply body.
///
/// A reply without choices, or whose first choice has missing, null, or
/// empty content, carries nothing usable and counts as an upstream failure.
/// It must never reach the JSON parsing stage.
fn extract_content(body: ChatResponse) -> Result<String, GatewayError> {
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or(GatewayError::EmptyReply)
}

/// Gateway adapter for the DeepSeek inference API.
pub struct DeepSeekGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl DeepSeekGateway {
    /// Build a gateway from provider configuration.
    ///
    /// Fails when no API key is configured or the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ProviderConfig) -> Result<Self, GatewayError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| GatewayError::Other("no API key configured".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key,
        })
    }
}

#[async_trait]
impl LlmGateway for DeepSeekGateway {
    async fn complete(
        &self,
        model: &Model,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model: model.as_str(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_text,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stream: false,
        };

        debug!(endpoint = %self.endpoint, model = %model, "sending chat completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::BadStatus(status.as_u16()));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::ConnectionError(format!("failed to read body: {e}")))?;

        extract_content(body)
    }
}
