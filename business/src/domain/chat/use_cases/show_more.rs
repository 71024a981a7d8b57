use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::session::Page;
use crate::domain::shared::value_objects::SessionId;

pub struct ShowMoreParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait ShowMoreUseCase: Send + Sync {
    async fn execute(&self, params: ShowMoreParams) -> Result<Page, ChatError>;
}
