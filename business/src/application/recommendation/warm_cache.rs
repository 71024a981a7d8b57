use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recommendation::cache::RecommendationCache;
use crate::domain::recommendation::model::{RecommendationQuery, ResponseMode};
use crate::domain::recommendation::use_cases::recommend::{RecommendParams, RecommendUseCase};
use crate::domain::recommendation::use_cases::warm_cache::{WarmCacheParams, WarmCacheUseCase};
use crate::domain::suggestion::model::default_suggestions;

/// Pre-computes the default suggestion chips so the first click is instant.
///
/// Results are written by the recommend use case itself; queries already in
/// the cache are skipped.
pub struct WarmCacheUseCaseImpl {
    pub recommend: Arc<dyn RecommendUseCase>,
    pub cache: Arc<RecommendationCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl WarmCacheUseCase for WarmCacheUseCaseImpl {
    async fn execute(&self, params: WarmCacheParams) -> usize {
        let mut warmed = 0;

        for language in params.languages {
            for text in default_suggestions(language) {
                if self.cache.get(language, text).is_some() {
                    continue;
                }

                let params = RecommendParams {
                    query: RecommendationQuery::new(*text, language),
                    catalog: None,
                };
                match self.recommend.execute(params).await {
                    Ok(result) if result.mode == ResponseMode::Ai => warmed += 1,
                    Ok(result) => self.logger.debug(&format!(
                        "Warm-up for '{}' ({}) ended in {} mode",
                        text, language, result.mode
                    )),
                    Err(err) => self.logger.warn(&format!(
                        "Warm-up for '{}' ({}) failed: {}",
                        text, language, err
                    )),
                }
            }
        }

        self.logger
            .info(&format!("Cache warm-up finished: {} queries cached", warmed));
        warmed
    }
}
