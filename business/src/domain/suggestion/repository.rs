use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::Language;

use super::model::QueryHistory;

/// Persistence port for the ranked query history.
///
/// Implementations return an empty history when the stored blob is corrupt.
#[async_trait]
pub trait SuggestionRepository: Send + Sync {
    async fn get_history(&self, language: Language) -> Result<QueryHistory, RepositoryError>;
    async fn save_history(
        &self,
        language: Language,
        history: &QueryHistory,
    ) -> Result<(), RepositoryError>;
}
