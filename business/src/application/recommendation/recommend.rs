use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::recommendation::cache::RecommendationCache;
use crate::domain::recommendation::degraded::{
    DEGRADED_RECOMMENDATION_COUNT, clarification_message, degraded_message,
    degraded_recommendations,
};
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::extractor::{ExtractionStrategy, extract, strip_marker};
use crate::domain::recommendation::model::{
    CompletionRequest, RecommendationResult, ResponseMode,
};
use crate::domain::recommendation::pre_filter::filter_candidates;
use crate::domain::recommendation::prompt::{PromptOptions, build_prompt};
use crate::domain::recommendation::services::CompletionService;
use crate::domain::recommendation::use_cases::recommend::{RecommendParams, RecommendUseCase};

pub struct RecommendUseCaseImpl {
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub completion: Arc<dyn CompletionService>,
    pub cache: Arc<RecommendationCache>,
    pub prompt_options: PromptOptions,
    pub max_tokens: u32,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecommendUseCase for RecommendUseCaseImpl {
    async fn execute(
        &self,
        params: RecommendParams,
    ) -> Result<RecommendationResult, RecommendationError> {
        let query = params.query;
        self.logger.info(&format!(
            "Recommending for query ({}): {}",
            query.language, query.text
        ));

        let supplied = params.catalog.filter(|wines| !wines.is_empty());
        // The cache only ever holds answers drawn from the server catalog.
        let cacheable = query.is_fresh() && supplied.is_none();
        let catalog = match supplied {
            Some(wines) => wines,
            None => self
                .catalog_repository
                .get_all(query.language)
                .await
                .map_err(|_| RecommendationError::CatalogUnavailable)?,
        };

        let candidates = filter_candidates(&catalog, &query.text, &query.exclude_ids);
        if candidates.is_empty() {
            self.logger.info(&format!(
                "{}: asking the user to loosen constraints",
                RecommendationError::EmptyCandidateSet
            ));
            return Ok(RecommendationResult {
                narrative: clarification_message(query.language).to_string(),
                items: Vec::new(),
                mode: ResponseMode::Clarification,
            });
        }
        self.logger.debug(&format!(
            "{} of {} catalog items remain after pre-filter",
            candidates.len(),
            catalog.len()
        ));

        if cacheable
            && let Some(cached) = self.cache.get(query.language, &query.text)
        {
            self.logger.info("Serving cached recommendation");
            return Ok(cached);
        }

        let prompt = build_prompt(&query, &candidates, &self.prompt_options);
        self.logger.debug(&format!(
            "Prompt samples {} of {} candidates",
            prompt.sampled_ids.len(),
            candidates.len()
        ));
        let request = CompletionRequest {
            system_prompt: prompt.system_prompt,
            user_prompt: prompt.user_prompt,
            max_tokens: self.max_tokens,
        };

        let reply = match self.completion.complete(&request).await {
            Ok(reply) => reply,
            Err(err) => {
                self.logger
                    .warn(&format!("{}: falling back to degraded mode", err));
                let items = degraded_recommendations(
                    &candidates,
                    &query.text,
                    DEGRADED_RECOMMENDATION_COUNT,
                );
                return Ok(RecommendationResult {
                    narrative: degraded_message(query.language).to_string(),
                    items,
                    mode: ResponseMode::Degraded,
                });
            }
        };

        let extraction = extract(&reply, &candidates);
        match extraction.strategy {
            Some(ExtractionStrategy::StructuredIds) => {}
            Some(strategy) => self.logger.warn(&format!(
                "{}: recovered {} items with {}",
                RecommendationError::MalformedUpstreamReply,
                extraction.items.len(),
                strategy
            )),
            None => {}
        }

        let result = RecommendationResult {
            narrative: strip_marker(&reply),
            items: extraction.items,
            mode: ResponseMode::Ai,
        };

        if cacheable {
            self.cache.put(query.language, &query.text, result.clone());
        }

        self.logger
            .info(&format!("Recommended {} items", result.items.len()));
        Ok(result)
    }
}
