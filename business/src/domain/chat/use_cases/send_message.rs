use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::session::Page;
use crate::domain::recommendation::model::ResponseMode;
use crate::domain::shared::value_objects::SessionId;

pub struct SendChatMessageParams {
    pub session_id: SessionId,
    pub message: String,
}

/// Narrative and first page of one chat turn.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub narrative: String,
    pub mode: ResponseMode,
    pub page: Page,
}

#[async_trait]
pub trait SendChatMessageUseCase: Send + Sync {
    async fn execute(&self, params: SendChatMessageParams) -> Result<ChatReply, ChatError>;
}
