use async_trait::async_trait;

use crate::domain::shared::value_objects::Language;
use crate::domain::suggestion::errors::SuggestionError;

pub struct GenerateSuggestionsParams {
    pub language: Language,
    pub limit: usize,
}

#[async_trait]
pub trait GenerateSuggestionsUseCase: Send + Sync {
    async fn execute(&self, params: GenerateSuggestionsParams)
    -> Result<Vec<String>, SuggestionError>;
}
