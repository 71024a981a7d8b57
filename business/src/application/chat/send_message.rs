use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::chat::errors::ChatError;
use crate::domain::chat::repository::ChatSessionRepository;
use crate::domain::chat::session::ChatSession;
use crate::domain::chat::use_cases::send_message::{
    ChatReply, SendChatMessageParams, SendChatMessageUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::RecommendationQuery;
use crate::domain::recommendation::pre_filter::filter_candidates;
use crate::domain::recommendation::use_cases::recommend::{RecommendParams, RecommendUseCase};
use crate::domain::shared::value_objects::SessionId;
use crate::domain::suggestion::use_cases::record::{RecordQueryParams, RecordQueryUseCase};

/// Runs one chat turn: resets pagination, asks for recommendations and
/// reveals the first page.
///
/// The completion runs outside the session lock. If a newer message arrived
/// meanwhile, the result is discarded with [`ChatError::StaleResponse`].
pub struct SendChatMessageUseCaseImpl {
    pub sessions: Arc<dyn ChatSessionRepository>,
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub recommend: Arc<dyn RecommendUseCase>,
    pub record_query: Arc<dyn RecordQueryUseCase>,
    pub lock: Arc<Mutex<()>>,
    pub logger: Arc<dyn Logger>,
}

impl SendChatMessageUseCaseImpl {
    async fn load(&self, id: &SessionId) -> Result<ChatSession, ChatError> {
        self.sessions.get(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ChatError::NotFound,
            other => ChatError::Repository(other),
        })
    }
}

#[async_trait]
impl SendChatMessageUseCase for SendChatMessageUseCaseImpl {
    async fn execute(&self, params: SendChatMessageParams) -> Result<ChatReply, ChatError> {
        let text = params.message.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let (token, history, language) = {
            let _guard = self.lock.lock().await;
            let mut session = self.load(&params.session_id).await?;
            let (token, history) = session.begin_query(text);
            self.sessions.save(&session).await?;
            (token, history, session.language)
        };

        if let Err(err) = self
            .record_query
            .execute(RecordQueryParams {
                language,
                text: text.to_string(),
            })
            .await
        {
            self.logger
                .warn(&format!("Could not record query history: {}", err));
        }

        let mut query = RecommendationQuery::new(text, language);
        query.history = history;
        let result = self
            .recommend
            .execute(RecommendParams {
                query,
                catalog: None,
            })
            .await?;

        let catalog = self
            .catalog_repository
            .get_all(language)
            .await
            .map_err(|_| RecommendationError::CatalogUnavailable)?;
        let pool = filter_candidates(&catalog, text, &HashSet::new());

        let _guard = self.lock.lock().await;
        let mut session = self.load(&params.session_id).await?;
        let page = match session.complete(token, &result, &pool) {
            Ok(page) => page,
            Err(err) => {
                self.logger.info(&format!(
                    "Discarding result for session {}: {}",
                    params.session_id, err
                ));
                return Err(err);
            }
        };
        self.sessions.save(&session).await?;

        self.logger.info(&format!(
            "Session {} rendered {} items in {} mode",
            params.session_id,
            page.items.len(),
            result.mode
        ));

        Ok(ChatReply {
            narrative: result.narrative,
            mode: result.mode,
            page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::{CatalogItem, WineAttributes, WineColor};
    use crate::domain::chat::session::SessionState;
    use crate::domain::recommendation::model::{RecommendationResult, ResponseMode};
    use crate::domain::shared::value_objects::Language;
    use crate::domain::suggestion::errors::SuggestionError;
    use mockall::mock;

    mock! {
        pub SessionRepo {}

        #[async_trait]
        impl ChatSessionRepository for SessionRepo {
            async fn get(&self, id: &SessionId) -> Result<ChatSession, RepositoryError>;
            async fn save(&self, session: &ChatSession) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub CatalogRepo {}

        #[async_trait]
        impl CatalogRepository for CatalogRepo {
            async fn get_all(&self, language: Language) -> Result<Vec<CatalogItem>, RepositoryError>;
        }
    }

    mock! {
        pub Recommend {}

        #[async_trait]
        impl RecommendUseCase for Recommend {
            async fn execute(&self, params: RecommendParams) -> Result<RecommendationResult, RecommendationError>;
        }
    }

    mock! {
        pub RecordQuery {}

        #[async_trait]
        impl RecordQueryUseCase for RecordQuery {
            async fn execute(&self, params: RecordQueryParams) -> Result<(), SuggestionError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    type Store = Arc<std::sync::Mutex<ChatSession>>;

    /// Session repository backed by a single shared session.
    fn session_repo(store: Store) -> MockSessionRepo {
        let mut repository = MockSessionRepo::new();
        let read = store.clone();
        repository
            .expect_get()
            .returning(move |_| Ok(read.lock().unwrap().clone()));
        repository.expect_save().returning(move |session| {
            *store.lock().unwrap() = session.clone();
            Ok(())
        });
        repository
    }

    fn red(id: usize) -> CatalogItem {
        CatalogItem::new(format!("r{}", id), format!("Red {}", id), "12,00 €").with_attributes(
            WineAttributes {
                color: Some(WineColor::Red),
                ..Default::default()
            },
        )
    }

    fn white(id: usize) -> CatalogItem {
        CatalogItem::new(format!("w{}", id), format!("White {}", id), "12,00 €").with_attributes(
            WineAttributes {
                color: Some(WineColor::White),
                ..Default::default()
            },
        )
    }

    fn catalog() -> Vec<CatalogItem> {
        let mut catalog: Vec<CatalogItem> = (0..6).map(white).collect();
        catalog.extend((0..6).map(red));
        catalog
    }

    fn catalog_repo() -> Arc<dyn CatalogRepository> {
        let mut repository = MockCatalogRepo::new();
        repository.expect_get_all().returning(|_| Ok(catalog()));
        Arc::new(repository)
    }

    fn record_query() -> Arc<dyn RecordQueryUseCase> {
        let mut record = MockRecordQuery::new();
        record.expect_execute().returning(|_| Ok(()));
        Arc::new(record)
    }

    fn ai_result(items: Vec<CatalogItem>) -> RecommendationResult {
        RecommendationResult {
            narrative: "Try these".to_string(),
            items,
            mode: ResponseMode::Ai,
        }
    }

    fn use_case(store: Store, recommend: MockRecommend) -> SendChatMessageUseCaseImpl {
        SendChatMessageUseCaseImpl {
            sessions: Arc::new(session_repo(store)),
            catalog_repository: catalog_repo(),
            recommend: Arc::new(recommend),
            record_query: record_query(),
            lock: Arc::new(Mutex::new(())),
            logger: mock_logger(),
        }
    }

    fn new_store() -> Store {
        Arc::new(std::sync::Mutex::new(ChatSession::new(
            SessionId::new("s-1"),
            Language::En,
        )))
    }

    fn send(text: &str) -> SendChatMessageParams {
        SendChatMessageParams {
            session_id: SessionId::new("s-1"),
            message: text.to_string(),
        }
    }

    #[tokio::test]
    async fn should_render_first_page_padded_with_same_color() {
        let store = new_store();
        let mut recommend = MockRecommend::new();
        recommend
            .expect_execute()
            .returning(|_| Ok(ai_result(vec![red(3), red(1)])));

        let reply = use_case(store.clone(), recommend)
            .execute(send("a red for lamb"))
            .await
            .unwrap();

        let ids: Vec<&str> = reply.page.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["r3", "r1", "r0", "r2"]);
        assert_eq!(reply.page.shown_count, 4);
        assert_eq!(reply.narrative, "Try these");

        let session = store.lock().unwrap().clone();
        assert_eq!(session.state(), SessionState::Rendered { shown: 4 });
        assert_eq!(session.history().len(), 2);
    }

    #[tokio::test]
    async fn should_pass_prior_turns_as_history() {
        let store = new_store();
        let mut recommend = MockRecommend::new();
        recommend
            .expect_execute()
            .withf(|params| params.query.text == "something cheaper")
            .times(1)
            .returning(|params| {
                assert_eq!(params.query.history.len(), 2);
                assert!(params.query.exclude_ids.is_empty());
                Ok(ai_result(vec![white(0)]))
            });
        recommend
            .expect_execute()
            .withf(|params| params.query.text == "a white")
            .times(1)
            .returning(|params| {
                assert!(params.query.history.is_empty());
                Ok(ai_result(vec![white(1)]))
            });

        let use_case = use_case(store, recommend);
        use_case.execute(send("a white")).await.unwrap();
        use_case.execute(send("something cheaper")).await.unwrap();
    }

    #[tokio::test]
    async fn should_discard_result_superseded_by_newer_message() {
        let store = new_store();
        let concurrent = store.clone();
        let mut recommend = MockRecommend::new();
        recommend.expect_execute().returning(move |_| {
            // A newer message lands while this completion is in flight
            concurrent.lock().unwrap().begin_query("actually, a white");
            Ok(ai_result(vec![red(0)]))
        });

        let result = use_case(store.clone(), recommend)
            .execute(send("a red"))
            .await;

        assert!(matches!(result.unwrap_err(), ChatError::StaleResponse));
        assert!(matches!(
            store.lock().unwrap().state(),
            SessionState::AwaitingCompletion { .. }
        ));
    }

    #[tokio::test]
    async fn should_reject_blank_message() {
        let mut recommend = MockRecommend::new();
        recommend.expect_execute().never();

        let result = use_case(new_store(), recommend).execute(send("   ")).await;

        assert!(matches!(result.unwrap_err(), ChatError::EmptyMessage));
    }

    #[tokio::test]
    async fn should_map_unknown_session_to_not_found() {
        let mut sessions = MockSessionRepo::new();
        sessions
            .expect_get()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = SendChatMessageUseCaseImpl {
            sessions: Arc::new(sessions),
            catalog_repository: catalog_repo(),
            recommend: Arc::new(MockRecommend::new()),
            record_query: record_query(),
            lock: Arc::new(Mutex::new(())),
            logger: mock_logger(),
        };

        let result = use_case.execute(send("a red")).await;

        assert!(matches!(result.unwrap_err(), ChatError::NotFound));
    }

    #[tokio::test]
    async fn should_answer_even_when_history_cannot_be_recorded() {
        let mut record = MockRecordQuery::new();
        record
            .expect_execute()
            .returning(|_| Err(SuggestionError::Repository(RepositoryError::Persistence)));
        let mut recommend = MockRecommend::new();
        recommend
            .expect_execute()
            .returning(|_| Ok(ai_result(vec![white(2)])));

        let use_case = SendChatMessageUseCaseImpl {
            sessions: Arc::new(session_repo(new_store())),
            catalog_repository: catalog_repo(),
            recommend: Arc::new(recommend),
            record_query: Arc::new(record),
            lock: Arc::new(Mutex::new(())),
            logger: mock_logger(),
        };

        let reply = use_case.execute(send("a white")).await.unwrap();

        assert_eq!(reply.page.items[0].id, "w2");
    }
}
