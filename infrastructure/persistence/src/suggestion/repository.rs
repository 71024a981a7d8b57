use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::Language;
use business::domain::suggestion::model::QueryHistory;
use business::domain::suggestion::repository::SuggestionRepository;

use crate::kv::store::KeyValueStore;

/// Query history serialized as JSON under `query_history:{language}`.
pub struct SuggestionRepositoryKv {
    store: Arc<dyn KeyValueStore>,
}

impl SuggestionRepositoryKv {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(language: Language) -> String {
        format!("query_history:{}", language)
    }
}

#[async_trait]
impl SuggestionRepository for SuggestionRepositoryKv {
    async fn get_history(&self, language: Language) -> Result<QueryHistory, RepositoryError> {
        let key = Self::key(language);
        let Some(blob) = self.store.get(&key).await? else {
            return Ok(QueryHistory::default());
        };

        Ok(serde_json::from_str(&blob).unwrap_or_else(|e| {
            tracing::warn!("{} for {}, resetting: {}", RepositoryError::Corrupt, key, e);
            QueryHistory::default()
        }))
    }

    async fn save_history(
        &self,
        language: Language,
        history: &QueryHistory,
    ) -> Result<(), RepositoryError> {
        let blob = serde_json::to_string(history).map_err(|_| RepositoryError::Persistence)?;
        self.store.put(&Self::key(language), blob).await
    }
}
