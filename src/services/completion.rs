// src/services/completion.rs
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{config::AzureOpenAiConfig, error::CompletionError, message::Message};

/// Sampling settings sent with every completion request.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 2000,
            temperature: 0.68,
            top_p: 0.71,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate the assistant reply for the given message sequence.
    async fn complete(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<String, CompletionError>;
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
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

/// Chat completions against an Azure OpenAI deployment.
pub struct AzureOpenAiClient {
    client: reqwest::Client,
    url: String,
    deployment: String,
    api_key: String,
    timeout: Duration,
}

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

impl AzureOpenAiClient {
    /// `timeout` bounds the whole request; connecting is capped separately.
    pub fn new(config: &AzureOpenAiConfig, timeout: Duration) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .build()?;

        Ok(Self {
            client,
            url: format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                config.endpoint.trim_end_matches('/'),
                config.deployment,
                config.api_version
            ),
            deployment: config.deployment.clone(),
            api_key: config.api_key.clone(),
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl CompletionClient for AzureOpenAiClient {
    async fn complete(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<String, CompletionError> {
        let body = ChatCompletionRequest {
            model: &self.deployment,
            messages,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
            frequency_penalty: params.frequency_penalty,
            presence_penalty: params.presence_penalty,
        };

        debug!(messages = messages.len(), deployment = %self.deployment, "sending chat completion");

        let response = self
            .client
            .post(&self.url)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::MalformedResponse("no choices returned".to_string()))?
            .message
            .content
            .ok_or_else(|| CompletionError::MalformedResponse("choice has no content".to_string()))
    }
}
