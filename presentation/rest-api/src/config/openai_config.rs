use std::time::Duration;

use openai::client::OpenAIClient;
use openai::completion::DEFAULT_MODEL;

use super::{env_opt, env_or};

const DEFAULT_MAX_TOKENS: u32 = 800;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for OpenAI API access.
///
/// A missing key is not fatal: the service starts and answers in degraded mode.
#[derive(Clone)]
pub struct OpenAIConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: Option<String>,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Environment variables:
    /// - OPENAI_API_KEY: optional
    /// - OPENAI_MODEL (default: "gpt-4o-mini")
    /// - OPENAI_BASE_URL (default: the public endpoint)
    /// - OPENAI_MAX_TOKENS (default: 800)
    /// - OPENAI_TIMEOUT_SECS (default: 30)
    pub fn from_env() -> Self {
        Self {
            api_key: env_opt("OPENAI_API_KEY"),
            model: env_opt("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: env_opt("OPENAI_BASE_URL"),
            max_tokens: env_or("OPENAI_MAX_TOKENS", DEFAULT_MAX_TOKENS),
            timeout: Duration::from_secs(env_or("OPENAI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
        }
    }

    pub fn ai_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn client(&self) -> Option<OpenAIClient> {
        self.api_key
            .clone()
            .map(|key| OpenAIClient::new(key, self.base_url.clone(), self.timeout))
    }
}
