use async_trait::async_trait;
use serde_json::json;

use business::domain::recommendation::errors::RecommendationError;
use business::domain::recommendation::model::CompletionRequest;
use business::domain::recommendation::services::CompletionService;

use crate::client::OpenAIClient;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
const TEMPERATURE: f32 = 0.7;

/// Chat completions adapter.
///
/// Every failure, including a missing API key or an empty completion, is
/// reported as [`RecommendationError::ServiceUnavailable`].
pub struct CompletionServiceOpenAI {
    client: Option<OpenAIClient>,
    model: String,
}

impl CompletionServiceOpenAI {
    pub fn new(client: Option<OpenAIClient>, model: String) -> Self {
        Self { client, model }
    }

    fn body(&self, request: &CompletionRequest) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": request.system_prompt},
                {"role": "user", "content": request.user_prompt},
            ],
            "temperature": TEMPERATURE,
            "max_tokens": request.max_tokens,
        })
    }
}

#[async_trait]
impl CompletionService for CompletionServiceOpenAI {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, RecommendationError> {
        let client = self
            .client
            .as_ref()
            .ok_or(RecommendationError::ServiceUnavailable)?;

        let response = client
            .client
            .post(client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", client.auth_header())
            .json(&self.body(request))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Completion request failed: {}", e);
                RecommendationError::ServiceUnavailable
            })?;

        if !response.status().is_success() {
            tracing::warn!("Completion service answered {}", response.status());
            return Err(RecommendationError::ServiceUnavailable);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| RecommendationError::ServiceUnavailable)?;

        let content = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .filter(|content| !content.trim().is_empty())
            .ok_or(RecommendationError::ServiceUnavailable)?;

        Ok(content.to_string())
    }
}
