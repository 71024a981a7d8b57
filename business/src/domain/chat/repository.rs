use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SessionId;

use super::session::ChatSession;

#[async_trait]
pub trait ChatSessionRepository: Send + Sync {
    async fn get(&self, id: &SessionId) -> Result<ChatSession, RepositoryError>;
    async fn save(&self, session: &ChatSession) -> Result<(), RepositoryError>;
}
