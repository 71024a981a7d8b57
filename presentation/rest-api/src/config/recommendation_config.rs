use business::domain::recommendation::prompt::{DEFAULT_SAMPLE_SIZE, PromptOptions};

use super::env_or;

#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    pub prompt: PromptOptions,
    pub cache_warmup_enabled: bool,
}

impl RecommendationConfig {
    /// Environment variables:
    /// - PROMPT_SAMPLE_SIZE: catalog lines sent to the model (default: 40)
    /// - PROMPT_SHUFFLE: shuffle the catalog before sampling (default: true)
    /// - CACHE_WARMUP_ENABLED: pre-compute the default chips at startup (default: true)
    pub fn from_env() -> Self {
        Self {
            prompt: PromptOptions {
                sample_size: env_or("PROMPT_SAMPLE_SIZE", DEFAULT_SAMPLE_SIZE).max(1),
                shuffle: env_or("PROMPT_SHUFFLE", true),
            },
            cache_warmup_enabled: env_or("CACHE_WARMUP_ENABLED", true),
        }
    }
}
