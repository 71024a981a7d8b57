use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::repository::ChatSessionRepository;
use crate::domain::chat::session::Page;
use crate::domain::chat::use_cases::show_more::{ShowMoreParams, ShowMoreUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct ShowMoreUseCaseImpl {
    pub repository: Arc<dyn ChatSessionRepository>,
    /// Shared with the send-message use case; guards session read-modify-write.
    pub lock: Arc<Mutex<()>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ShowMoreUseCase for ShowMoreUseCaseImpl {
    async fn execute(&self, params: ShowMoreParams) -> Result<Page, ChatError> {
        let _guard = self.lock.lock().await;

        let mut session = self
            .repository
            .get(&params.session_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ChatError::NotFound,
                other => ChatError::Repository(other),
            })?;

        let page = session.show_more()?;
        self.repository.save(&session).await?;

        self.logger.info(&format!(
            "Session {} shows {} more ({} total, exhausted: {})",
            session.id,
            page.items.len(),
            page.shown_count,
            page.exhausted
        ));
        Ok(page)
    }
}
