// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::completion::{AzureOpenAiClient, CompletionClient};
use crate::services::conversation::ConversationStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub conversation: ConversationStore,
    pub completions: Arc<dyn CompletionClient>,
    pub api_token: String,
}

impl AppState {
    pub fn new(
        api_token: impl Into<String>,
        system_prompt: impl Into<String>,
        completions: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            conversation: ConversationStore::new(system_prompt),
            completions,
            api_token: api_token.into(),
        }
    }

    /// State backed by the Azure OpenAI deployment named in `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = AzureOpenAiClient::new(&config.azure, config.upstream_timeout)?;
        Ok(Self::new(
            config.api_token.clone(),
            config.system_prompt.clone(),
            Arc::new(client),
        ))
    }
}
