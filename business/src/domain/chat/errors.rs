use crate::domain::recommendation::errors::RecommendationError;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat.session_not_found")]
    NotFound,
    #[error("chat.empty_message")]
    EmptyMessage,
    /// A newer query superseded the one this result belongs to.
    #[error("chat.stale_response")]
    StaleResponse,
    #[error("chat.awaiting_completion")]
    AwaitingCompletion,
    #[error("{0}")]
    Recommendation(#[from] RecommendationError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
