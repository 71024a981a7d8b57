use async_trait::async_trait;

use crate::domain::shared::value_objects::Language;
use crate::domain::suggestion::errors::SuggestionError;

pub struct RecordQueryParams {
    pub language: Language,
    pub text: String,
}

#[async_trait]
pub trait RecordQueryUseCase: Send + Sync {
    async fn execute(&self, params: RecordQueryParams) -> Result<(), SuggestionError>;
}
