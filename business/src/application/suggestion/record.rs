use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::repository::SuggestionRepository;
use crate::domain::suggestion::use_cases::record::{RecordQueryParams, RecordQueryUseCase};

pub struct RecordQueryUseCaseImpl {
    pub repository: Arc<dyn SuggestionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecordQueryUseCase for RecordQueryUseCaseImpl {
    async fn execute(&self, params: RecordQueryParams) -> Result<(), SuggestionError> {
        let mut history = self.repository.get_history(params.language).await?;
        history.record(&params.text, Utc::now())?;
        self.repository
            .save_history(params.language, &history)
            .await?;

        self.logger.debug(&format!(
            "Recorded query for {} ({} entries)",
            params.language,
            history.entries.len()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::Language;
    use crate::domain::suggestion::model::QueryHistory;
    use mockall::mock;

    mock! {
        pub SuggestionRepo {}

        #[async_trait]
        impl SuggestionRepository for SuggestionRepo {
            async fn get_history(&self, language: Language) -> Result<QueryHistory, RepositoryError>;
            async fn save_history(&self, language: Language, history: &QueryHistory) -> Result<(), RepositoryError>;
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

    #[tokio::test]
    async fn should_increment_count_of_known_query() {
        let mut repository = MockSuggestionRepo::new();
        repository.expect_get_history().returning(|_| {
            let mut history = QueryHistory::default();
            history.record("Red for steak", Utc::now()).unwrap();
            Ok(history)
        });
        repository
            .expect_save_history()
            .withf(|language, history| {
                *language == Language::En
                    && history.entries.len() == 1
                    && history.entries[0].count == 2
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = RecordQueryUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecordQueryParams {
                language: Language::En,
                text: "  red for STEAK ".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_blank_query_without_saving() {
        let mut repository = MockSuggestionRepo::new();
        repository
            .expect_get_history()
            .returning(|_| Ok(QueryHistory::default()));
        repository.expect_save_history().never();

        let use_case = RecordQueryUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecordQueryParams {
                language: Language::Fr,
                text: "   ".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), SuggestionError::InvalidQuery));
    }
}
