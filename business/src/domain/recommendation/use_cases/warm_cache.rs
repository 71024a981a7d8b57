use async_trait::async_trait;

use crate::domain::shared::value_objects::Language;

pub struct WarmCacheParams {
    pub languages: Vec<Language>,
}

#[async_trait]
pub trait WarmCacheUseCase: Send + Sync {
    /// Returns the number of queries written to the cache.
    async fn execute(&self, params: WarmCacheParams) -> usize;
}
