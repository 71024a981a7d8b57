use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::Language;

use super::model::CatalogItem;

/// Read-only access to the per-language catalogs.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn get_all(&self, language: Language) -> Result<Vec<CatalogItem>, RepositoryError>;
}
