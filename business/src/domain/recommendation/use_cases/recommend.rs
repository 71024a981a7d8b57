use async_trait::async_trait;

use crate::domain::catalog::model::CatalogItem;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::{RecommendationQuery, RecommendationResult};

pub struct RecommendParams {
    pub query: RecommendationQuery,
    /// Catalog supplied by the caller; `None` uses the stored catalog.
    pub catalog: Option<Vec<CatalogItem>>,
}

#[async_trait]
pub trait RecommendUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RecommendParams,
    ) -> Result<RecommendationResult, RecommendationError>;
}
