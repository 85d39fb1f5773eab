#![allow(dead_code)]

pub mod fake_azure;

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use property_chat_backend::error::CompletionError;
use property_chat_backend::message::Message;
use property_chat_backend::services::completion::{CompletionClient, GenerationParams};
use tokio::sync::Mutex;

pub const TOKEN: &str = "test-token";
pub const SYSTEM_PROMPT: &str = "You recommend apartments.";

/// Scripted completion client: pops one step per call, records what it saw.
#[derive(Default)]
pub struct ScriptedClient {
    steps: Mutex<VecDeque<Result<String, String>>>,
    pub seen: Mutex<Vec<Vec<Message>>>,
    pub delay: Option<Duration>,
}

impl ScriptedClient {
    pub fn replying(replies: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(replies.iter().map(|r| Ok(r.to_string())).collect()),
            ..Default::default()
        })
    }

    /// Always answers, after sleeping for `delay` on every call.
    pub fn delayed(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay: Some(delay),
            ..Default::default()
        })
    }

    pub fn failing(cause: &str) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(VecDeque::from([Err(cause.to_string())])),
            ..Default::default()
        })
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(
        &self,
        messages: &[Message],
        _params: &GenerationParams,
    ) -> Result<String, CompletionError> {
        self.seen.lock().await.push(messages.to_vec());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.steps.lock().await.pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(cause)) => Err(CompletionError::MalformedResponse(cause)),
            None => Ok("default reply".to_string()),
        }
    }
}
