use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use property_chat_backend::config::AzureOpenAiConfig;
use serde_json::Value;
use tokio::sync::Mutex;

/// What the last request to the fake deployment looked like.
#[derive(Default)]
pub struct Captured {
    pub deployment: Option<String>,
    pub api_version: Option<String>,
    pub api_key: Option<String>,
    pub body: Option<Value>,
}

/// Stand-in for an Azure OpenAI deployment answering with a fixed reply.
#[derive(Clone)]
pub struct FakeAzure {
    pub captured: Arc<Mutex<Captured>>,
    pub status: StatusCode,
    pub reply: Value,
    pub delay: Option<Duration>,
}

impl FakeAzure {
    pub fn new(status: StatusCode, reply: Value) -> Self {
        Self {
            captured: Arc::new(Mutex::new(Captured::default())),
            status,
            reply,
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Serve on an ephemeral port; returns the base URL.
    pub async fn spawn(self) -> String {
        let app = Router::new()
            .route(
                "/openai/deployments/{deployment}/chat/completions",
                post(completions),
            )
            .with_state(self);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/")
    }
}

async fn completions(
    State(fake): State<FakeAzure>,
    Path(deployment): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    {
        let mut captured = fake.captured.lock().await;
        captured.deployment = Some(deployment);
        captured.api_version = query.get("api-version").cloned();
        captured.api_key = headers
            .get("api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        captured.body = Some(body);
    }
    if let Some(delay) = fake.delay {
        tokio::time::sleep(delay).await;
    }
    (fake.status, Json(fake.reply))
}

pub fn azure_config(endpoint: String) -> AzureOpenAiConfig {
    AzureOpenAiConfig {
        endpoint,
        deployment: "gpt-4o-mini".to_string(),
        api_key: "upstream-key".to_string(),
        api_version: "2024-05-01-preview".to_string(),
    }
}
