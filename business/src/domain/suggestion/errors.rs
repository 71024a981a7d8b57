#[derive(Debug, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion.invalid_query")]
    InvalidQuery,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
