use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::repository::ChatSessionRepository;
use crate::domain::chat::session::ChatSession;
use crate::domain::chat::use_cases::start_session::{
    StartChatSessionParams, StartChatSessionUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::SessionId;

pub struct StartChatSessionUseCaseImpl {
    pub repository: Arc<dyn ChatSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl StartChatSessionUseCase for StartChatSessionUseCaseImpl {
    async fn execute(&self, params: StartChatSessionParams) -> Result<ChatSession, ChatError> {
        let session = ChatSession::new(SessionId::new(Uuid::new_v4().to_string()), params.language);
        self.repository.save(&session).await?;

        self.logger.info(&format!(
            "Started chat session {} ({})",
            session.id, session.language
        ));
        Ok(session)
    }
}
