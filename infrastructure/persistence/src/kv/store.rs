use async_trait::async_trait;

use business::domain::errors::RepositoryError;

/// String blobs addressed by key; the storage seam shared by the cart and
/// query history repositories.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    async fn put(&self, key: &str, value: String) -> Result<(), RepositoryError>;
    async fn delete(&self, key: &str) -> Result<(), RepositoryError>;
}
