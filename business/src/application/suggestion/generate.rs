use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::default_suggestions;
use crate::domain::suggestion::repository::SuggestionRepository;
use crate::domain::suggestion::use_cases::generate::{
    GenerateSuggestionsParams, GenerateSuggestionsUseCase,
};

pub const MAX_SUGGESTIONS: usize = 10;

pub struct GenerateSuggestionsUseCaseImpl {
    pub repository: Arc<dyn SuggestionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateSuggestionsUseCase for GenerateSuggestionsUseCaseImpl {
    async fn execute(
        &self,
        params: GenerateSuggestionsParams,
    ) -> Result<Vec<String>, SuggestionError> {
        let limit = params.limit.min(MAX_SUGGESTIONS);
        self.logger.info(&format!(
            "Generating suggestions for {} with limit: {}",
            params.language, limit
        ));

        let history = self.repository.get_history(params.language).await?;
        let suggestions = if history.entries.is_empty() {
            default_suggestions(params.language)
                .iter()
                .take(limit)
                .map(|text| text.to_string())
                .collect()
        } else {
            history.top(limit)
        };

        self.logger
            .info(&format!("Generated {} suggestions", suggestions.len()));

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::Language;
    use crate::domain::suggestion::model::QueryHistory;
    use chrono::{Duration, Utc};
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

    fn history_of(queries: &[&str]) -> QueryHistory {
        let start = Utc::now();
        let mut history = QueryHistory::default();
        for (i, text) in queries.iter().enumerate() {
            history
                .record(text, start + Duration::seconds(i as i64))
                .unwrap();
        }
        history
    }

    #[tokio::test]
    async fn should_return_defaults_when_history_is_empty() {
        let mut repository = MockSuggestionRepo::new();
        repository
            .expect_get_history()
            .returning(|_| Ok(QueryHistory::default()));

        let use_case = GenerateSuggestionsUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateSuggestionsParams {
                language: Language::Nl,
                limit: 4,
            })
            .await
            .unwrap();

        assert_eq!(result, default_suggestions(Language::Nl).to_vec());
    }

    #[tokio::test]
    async fn should_return_most_asked_queries_first() {
        let mut repository = MockSuggestionRepo::new();
        repository.expect_get_history().returning(|_| {
            Ok(history_of(&["rosé", "champagne", "champagne", "malbec"]))
        });

        let use_case = GenerateSuggestionsUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateSuggestionsParams {
                language: Language::En,
                limit: 2,
            })
            .await
            .unwrap();

        assert_eq!(result, vec!["champagne", "malbec"]);
    }

    #[tokio::test]
    async fn should_cap_limit() {
        let queries: Vec<String> = (0..15).map(|i| format!("query {}", i)).collect();
        let mut repository = MockSuggestionRepo::new();
        repository.expect_get_history().returning(move |_| {
            let refs: Vec<&str> = queries.iter().map(String::as_str).collect();
            Ok(history_of(&refs))
        });

        let use_case = GenerateSuggestionsUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateSuggestionsParams {
                language: Language::En,
                limit: 50,
            })
            .await
            .unwrap();

        assert_eq!(result.len(), MAX_SUGGESTIONS);
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut repository = MockSuggestionRepo::new();
        repository
            .expect_get_history()
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = GenerateSuggestionsUseCaseImpl {
            repository: Arc::new(repository),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GenerateSuggestionsParams {
                language: Language::En,
                limit: 4,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            SuggestionError::Repository(RepositoryError::Persistence)
        ));
    }
}
