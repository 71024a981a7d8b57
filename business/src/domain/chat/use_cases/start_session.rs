use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::session::ChatSession;
use crate::domain::shared::value_objects::Language;

pub struct StartChatSessionParams {
    pub language: Language,
}

#[async_trait]
pub trait StartChatSessionUseCase: Send + Sync {
    async fn execute(&self, params: StartChatSessionParams) -> Result<ChatSession, ChatError>;
}
