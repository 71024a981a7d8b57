use async_trait::async_trait;

use super::errors::RecommendationError;
use super::model::CompletionRequest;

/// Service port for the hosted text-completion model.
///
/// Implementations return [`RecommendationError::ServiceUnavailable`] when no
/// credential is configured or the call fails. Callers never retry.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, RecommendationError>;
}
