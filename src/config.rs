// src/config.rs
use std::{env, fmt::Debug, net::SocketAddr, time::Duration};

use anyhow::Context;
use tracing::{info, warn};

const DEFAULT_ENDPOINT_URL: &str = "https://aidid-openai.openai.azure.com/";
const DEFAULT_DEPLOYMENT_NAME: &str = "gpt-4o-mini";
const DEFAULT_API_KEY: &str = "REPLACE_WITH_YOUR_KEY_VALUE_HERE";
const DEFAULT_API_VERSION: &str = "2024-05-01-preview";
const DEFAULT_SEARCH_ENDPOINT: &str = "https://aidid-gpt.search.windows.net";
const DEFAULT_SEARCH_KEY: &str = "put your Azure AI Search admin key here";
const DEFAULT_SEARCH_INDEX: &str = "aidid_houses";
const DEFAULT_API_TOKEN: &str = "MY_SECRET_TOKEN";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 600;

pub const DEFAULT_SYSTEM_PROMPT: &str = "【機器人使用說明】\n\
語言要求：請使用繁體中文回覆所有問題及回應。\n\
系統角色與任務：您的主要目標是根據客戶的需求與偏好，從房屋資料中找出最匹配的房屋選項並提供詳細資訊。\n\
請利用資料中的各項欄位（例如：價格、坪數、地點、房型等）來評估與推薦最適合客戶的房屋。\n\
請在回答時依下列格式回應：\n\n\
【推薦區域】：<區域名稱>\n\
【推薦公園】：<推薦公園及說明>\n\
【房型】：<房型及說明>\n\
【詳細資訊】：\n   \
名稱：<房屋名稱>\n   \
地址：<完整地址>\n   \
價格：<價格>\n   \
坪數：<建築坪數或室內面積>\n   \
格局：<房型或格局>\n   \
屋齡：<屋齡>\n   \
樓層：<樓層資訊>\n   \
社區：<社區或小區名稱>\n   \
特色：<其他特色說明>\n\n\
另外，請附上描述及思考過程，列出考慮的因素，例如坪數、房型、周邊環境及其他條件。";

#[derive(Clone)]
pub struct AzureOpenAiConfig {
    pub endpoint: String,
    pub deployment: String,
    pub api_key: String,
    pub api_version: String,
}

impl Debug for AzureOpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureOpenAiConfig")
            .field("endpoint", &self.endpoint)
            .field("deployment", &self.deployment)
            .field("api_key", &"<redacted>")
            .field("api_version", &self.api_version)
            .finish()
    }
}

/// Azure AI Search settings. Loaded but not consulted when answering chats.
#[derive(Clone)]
pub struct SearchConfig {
    pub endpoint: String,
    pub key: String,
    pub index: String,
}

impl Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConfig")
            .field("endpoint", &self.endpoint)
            .field("key", &"<redacted>")
            .field("index", &self.index)
            .finish()
    }
}

#[derive(Clone)]
pub struct Config {
    pub azure: AzureOpenAiConfig,
    pub search: SearchConfig,
    pub api_token: String,
    pub system_prompt: String,
    pub bind_addr: SocketAddr,
    pub upstream_timeout: Duration,
}

impl Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("azure", &self.azure)
            .field("search", &self.search)
            .field("api_token", &"<redacted>")
            .field("bind_addr", &self.bind_addr)
            .field("upstream_timeout", &self.upstream_timeout)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Read `.env` (if present) and then the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to built-in defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_addr = get("BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse::<SocketAddr>()
            .context("invalid BIND_ADDR")?;

        let upstream_timeout = lookup("UPSTREAM_TIMEOUT_SECS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("invalid UPSTREAM_TIMEOUT_SECS")?
            .map_or(Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS), Duration::from_secs);

        Ok(Self {
            azure: AzureOpenAiConfig {
                endpoint: get("AZURE_OPENAI_ENDPOINT_URL", DEFAULT_ENDPOINT_URL),
                deployment: get("AZURE_OPENAI_DEPLOYMENT_NAME", DEFAULT_DEPLOYMENT_NAME),
                api_key: get("AZURE_OPENAI_API_KEY", DEFAULT_API_KEY),
                api_version: get("AZURE_OPENAI_API_VERSION", DEFAULT_API_VERSION),
            },
            search: SearchConfig {
                endpoint: get("AZURE_SEARCH_ENDPOINT", DEFAULT_SEARCH_ENDPOINT),
                key: get("AZURE_SEARCH_KEY", DEFAULT_SEARCH_KEY),
                index: get("AZURE_SEARCH_INDEX_NAME", DEFAULT_SEARCH_INDEX),
            },
            api_token: get("API_TOKEN", DEFAULT_API_TOKEN),
            system_prompt: get("SYSTEM_PROMPT", DEFAULT_SYSTEM_PROMPT),
            bind_addr,
            upstream_timeout,
        })
    }

    /// Names of secrets still set to their shipped placeholder values.
    pub fn insecure_defaults(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.azure.api_key == DEFAULT_API_KEY {
            keys.push("AZURE_OPENAI_API_KEY");
        }
        if self.search.key == DEFAULT_SEARCH_KEY {
            keys.push("AZURE_SEARCH_KEY");
        }
        if self.api_token == DEFAULT_API_TOKEN {
            keys.push("API_TOKEN");
        }
        keys
    }

    pub fn log_summary(&self) {
        info!(
            endpoint = %self.azure.endpoint,
            deployment = %self.azure.deployment,
            api_version = %self.azure.api_version,
            "completion service configured"
        );
        info!(
            endpoint = %self.search.endpoint,
            index = %self.search.index,
            "search service configured (unused)"
        );
        for key in self.insecure_defaults() {
            warn!(key, "using built-in fallback secret, set it before deploying");
        }
    }
}
